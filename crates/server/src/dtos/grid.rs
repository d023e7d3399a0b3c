use crate::dtos::session::SessionResponse;
use crate::error::ApiError;
use models::grid::{DayColumn, GridConfig, OverlapGroup, SessionBlock, WeeklyGrid};
use models::session::{DraftError, TimeSlot};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Optional override of the visible hour window
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct GridQueryParams {
    /// First visible time of day, "HH:MM"; defaults to 07:00
    pub day_start: Option<String>,
    /// Last visible time of day, "HH:MM"; defaults to 21:00
    pub day_end: Option<String>,
}

impl GridQueryParams {
    pub fn to_config(&self) -> Result<GridConfig, ApiError> {
        let defaults = GridConfig::default();
        let start = self.day_start.as_deref();
        let end = self.day_end.as_deref();

        if start.is_none() && end.is_none() {
            return Ok(defaults);
        }

        // Validate the pair as one window so an inverted range is caught
        // even when only one bound was overridden
        let window = TimeSlot::from_strings(
            start.unwrap_or("07:00"),
            end.unwrap_or("21:00"),
        )
        .map_err(|e| match &e {
            DraftError::BadTimeFormat(s) => ApiError::Validation {
                field: if start == Some(s.as_str()) {
                    "day_start"
                } else {
                    "day_end"
                },
                message: e.to_string(),
            },
            DraftError::EmptyTimeSlot => ApiError::Validation {
                field: "day_end",
                message: "day_start must be before day_end".to_string(),
            },
        })?;

        Ok(GridConfig {
            day_start: window.start,
            day_end: window.end,
            ..defaults
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WeeklyGridResponse {
    pub days: Vec<DayColumnResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DayColumnResponse {
    /// ISO day number, Monday = 1
    pub day_of_week: u8,
    /// Day name, e.g. "Monday"
    pub day: String,
    pub groups: Vec<OverlapGroupResponse>,
}

/// Sessions that overlap in time and render as parallel columns
#[derive(Debug, Serialize, ToSchema)]
pub struct OverlapGroupResponse {
    /// Number of parallel sub-columns in this group
    pub columns: usize,
    pub blocks: Vec<SessionBlockResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionBlockResponse {
    pub session: SessionResponse,
    /// Sub-column within the group, 0-based
    pub column: usize,
    /// Vertical offset from the top of the visible window, in grid units
    pub offset: f32,
    /// Vertical extent in grid units, clipped to the visible window
    pub extent: f32,
    /// Stable display color of the owning course
    pub color: String,
}

impl From<WeeklyGrid> for WeeklyGridResponse {
    fn from(grid: WeeklyGrid) -> Self {
        Self {
            days: grid.days.into_iter().map(DayColumnResponse::from).collect(),
        }
    }
}

impl From<DayColumn> for DayColumnResponse {
    fn from(day: DayColumn) -> Self {
        Self {
            day_of_week: day.day.number(),
            day: day.day.to_string(),
            groups: day
                .groups
                .into_iter()
                .map(OverlapGroupResponse::from)
                .collect(),
        }
    }
}

impl From<OverlapGroup> for OverlapGroupResponse {
    fn from(group: OverlapGroup) -> Self {
        Self {
            columns: group.columns,
            blocks: group
                .blocks
                .into_iter()
                .map(SessionBlockResponse::from)
                .collect(),
        }
    }
}

impl From<SessionBlock> for SessionBlockResponse {
    fn from(block: SessionBlock) -> Self {
        Self {
            session: SessionResponse::from(&block.session),
            column: block.column,
            offset: block.offset,
            extent: block.extent,
            color: block.color.to_string(),
        }
    }
}
