use crate::session::Session;
use crate::weekday::Weekday;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fixed palette cycled by course id
///
/// Indexing is a pure function of the id, so a course keeps its color across
/// renders and across different weekly views.
pub const PALETTE: [&str; 8] = [
    "#1f77b4", "#2ca02c", "#d62728", "#9467bd", "#ff7f0e", "#17becf", "#8c564b", "#e377c2",
];

/// Deterministic display color for a course
pub fn course_color(course_id: Uuid) -> &'static str {
    PALETTE[(course_id.as_u128() % PALETTE.len() as u128) as usize]
}

/// Layout parameters for assembling a weekly grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Day columns to emit, in display order
    pub days: Vec<Weekday>,
    /// First visible time of day
    pub day_start: NaiveTime,
    /// Last visible time of day
    pub day_end: NaiveTime,
    /// Vertical units per minute; 1.0 emits positions in plain minutes
    pub minute_scale: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            days: Weekday::TEACHING_WEEK.to_vec(),
            day_start: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            day_end: NaiveTime::from_hms_opt(21, 0, 0).unwrap(),
            minute_scale: 1.0,
        }
    }
}

/// A session positioned inside its day column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionBlock {
    pub session: Session,
    /// Sub-column within the overlap group, 0-based
    pub column: usize,
    /// Vertical offset from `day_start`, in scaled units
    pub offset: f32,
    /// Vertical extent, in scaled units, after clipping to the visible range
    pub extent: f32,
    pub color: &'static str,
}

/// A maximal run of same-day sessions whose time ranges chain together
///
/// The group renders as `columns` equal-width sub-columns side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlapGroup {
    pub columns: usize,
    pub blocks: Vec<SessionBlock>,
}

/// One weekday of the grid; present even when it has no sessions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayColumn {
    pub day: Weekday,
    pub groups: Vec<OverlapGroup>,
}

/// The assembled weekly timetable, one column per configured day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyGrid {
    pub days: Vec<DayColumn>,
}

impl WeeklyGrid {
    /// Total number of positioned session blocks
    pub fn block_count(&self) -> usize {
        self.days
            .iter()
            .flat_map(|day| &day.groups)
            .map(|group| group.blocks.len())
            .sum()
    }
}

/// Arranges sessions into a day-by-time grid
///
/// Within a day, sessions are sorted by start then end time and packed
/// greedily into overlap groups: a session whose start is at or past the
/// latest end seen so far opens a new group, anything else joins the current
/// one and extends its reach. Each group member gets a sub-column in sort
/// order, so no two blocks in the same day and column overlap in time.
///
/// Sessions reaching outside `[day_start, day_end]` are clipped at the
/// boundary, never dropped. Callers pass sessions on the configured days
/// only; the day filter upstream owns that contract.
pub fn build_grid(sessions: &[Session], config: &GridConfig) -> WeeklyGrid {
    let days = config
        .days
        .iter()
        .map(|&day| DayColumn {
            day,
            groups: build_day(sessions, day, config),
        })
        .collect();

    WeeklyGrid { days }
}

fn build_day(sessions: &[Session], day: Weekday, config: &GridConfig) -> Vec<OverlapGroup> {
    let mut day_sessions: Vec<&Session> = sessions.iter().filter(|s| s.day == day).collect();
    day_sessions.sort_by_key(|s| (s.slot.start, s.slot.end));

    let mut groups = Vec::new();
    let mut current: Vec<&Session> = Vec::new();
    let mut current_end: Option<NaiveTime> = None;

    for session in day_sessions {
        match current_end {
            Some(end) if session.slot.start >= end => {
                groups.push(finish_group(std::mem::take(&mut current), config));
                current.push(session);
                current_end = Some(session.slot.end);
            }
            _ => {
                current.push(session);
                current_end = Some(current_end.map_or(session.slot.end, |end| {
                    end.max(session.slot.end)
                }));
            }
        }
    }

    if !current.is_empty() {
        groups.push(finish_group(current, config));
    }

    groups
}

fn finish_group(members: Vec<&Session>, config: &GridConfig) -> OverlapGroup {
    let columns = members.len();
    let blocks = members
        .into_iter()
        .enumerate()
        .map(|(column, session)| position_block(session, column, config))
        .collect();

    OverlapGroup { columns, blocks }
}

fn position_block(session: &Session, column: usize, config: &GridConfig) -> SessionBlock {
    // Clamp to the visible window; a slot wholly outside collapses to a
    // zero-extent block pinned at the nearer boundary
    let start = session.slot.start.clamp(config.day_start, config.day_end);
    let end = session.slot.end.clamp(config.day_start, config.day_end);

    let offset = (start - config.day_start).num_minutes() as f32 * config.minute_scale;
    let extent = (end - start).num_minutes() as f32 * config.minute_scale;

    SessionBlock {
        session: session.clone(),
        column,
        offset,
        extent,
        color: course_color(session.course_id),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::session::{SessionType, TimeSlot};
    use uuid::Uuid;

    fn session(n: u128, day: Weekday, start: &str, end: &str) -> Session {
        Session {
            id: Uuid::from_u128(n),
            course_id: Uuid::from_u128(n * 100),
            teacher_id: Uuid::from_u128(0x7eac),
            day,
            slot: TimeSlot::from_strings(start, end).unwrap(),
            room: None,
            session_type: SessionType::Theory,
        }
    }

    #[test]
    fn test_every_session_appears_exactly_once() {
        let sessions = vec![
            session(1, Weekday::Monday, "08:00", "10:00"),
            session(2, Weekday::Monday, "09:00", "11:00"),
            session(3, Weekday::Wednesday, "14:00", "16:00"),
            session(4, Weekday::Saturday, "08:00", "09:00"),
        ];

        let grid = build_grid(&sessions, &GridConfig::default());
        assert_eq!(grid.block_count(), sessions.len());

        let mut seen: Vec<Uuid> = grid
            .days
            .iter()
            .flat_map(|d| &d.groups)
            .flat_map(|g| &g.blocks)
            .map(|b| b.session.id)
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), sessions.len());
    }

    #[test]
    fn test_empty_days_still_emit_columns() {
        let grid = build_grid(&[], &GridConfig::default());
        assert_eq!(grid.days.len(), 6);
        assert!(grid.days.iter().all(|d| d.groups.is_empty()));
        assert_eq!(grid.days[0].day, Weekday::Monday);
        assert_eq!(grid.days[5].day, Weekday::Saturday);
    }

    #[test]
    fn test_three_way_overlap_forms_one_group() {
        // All three overlap 09:00-10:00
        let sessions = vec![
            session(1, Weekday::Monday, "08:00", "10:00"),
            session(2, Weekday::Monday, "09:00", "11:00"),
            session(3, Weekday::Monday, "09:30", "10:30"),
        ];

        let grid = build_grid(&sessions, &GridConfig::default());
        let monday = &grid.days[0];
        assert_eq!(monday.groups.len(), 1);

        let group = &monday.groups[0];
        assert_eq!(group.columns, 3);
        let columns: Vec<usize> = group.blocks.iter().map(|b| b.column).collect();
        assert_eq!(columns, vec![0, 1, 2]);
    }

    #[test]
    fn test_chained_overlap_extends_group() {
        // B overlaps A, C overlaps B but not A; still one connected group
        let sessions = vec![
            session(1, Weekday::Tuesday, "08:00", "10:00"),
            session(2, Weekday::Tuesday, "09:00", "12:00"),
            session(3, Weekday::Tuesday, "11:00", "13:00"),
        ];

        let grid = build_grid(&sessions, &GridConfig::default());
        let tuesday = &grid.days[1];
        assert_eq!(tuesday.groups.len(), 1);
        assert_eq!(tuesday.groups[0].columns, 3);
    }

    #[test]
    fn test_back_to_back_sessions_split_groups() {
        let sessions = vec![
            session(1, Weekday::Monday, "08:00", "10:00"),
            session(2, Weekday::Monday, "10:00", "12:00"),
        ];

        let grid = build_grid(&sessions, &GridConfig::default());
        let monday = &grid.days[0];
        assert_eq!(monday.groups.len(), 2);
        assert!(monday.groups.iter().all(|g| g.columns == 1));
    }

    #[test]
    fn test_no_same_column_overlap() {
        let sessions = vec![
            session(1, Weekday::Monday, "08:00", "10:00"),
            session(2, Weekday::Monday, "09:00", "11:00"),
            session(3, Weekday::Monday, "10:30", "12:00"),
            session(4, Weekday::Monday, "12:00", "13:00"),
        ];

        let grid = build_grid(&sessions, &GridConfig::default());
        for day in &grid.days {
            for group in &day.groups {
                for a in &group.blocks {
                    for b in &group.blocks {
                        if a.session.id != b.session.id && a.column == b.column {
                            assert!(!a.session.slot.overlaps(b.session.slot));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_vertical_positioning() {
        let config = GridConfig::default(); // day starts 07:00, scale 1.0
        let sessions = vec![session(1, Weekday::Monday, "08:00", "10:30")];

        let grid = build_grid(&sessions, &config);
        let block = &grid.days[0].groups[0].blocks[0];
        assert_eq!(block.offset, 60.0);
        assert_eq!(block.extent, 150.0);
    }

    #[test]
    fn test_minute_scale_applies() {
        let config = GridConfig {
            minute_scale: 0.5,
            ..GridConfig::default()
        };
        let sessions = vec![session(1, Weekday::Monday, "08:00", "10:00")];

        let grid = build_grid(&sessions, &config);
        let block = &grid.days[0].groups[0].blocks[0];
        assert_eq!(block.offset, 30.0);
        assert_eq!(block.extent, 60.0);
    }

    #[test]
    fn test_clipping_at_window_boundaries() {
        let config = GridConfig::default(); // visible 07:00-21:00
        let sessions = vec![
            session(1, Weekday::Monday, "06:00", "08:00"),
            session(2, Weekday::Tuesday, "20:00", "22:30"),
        ];

        let grid = build_grid(&sessions, &config);

        let early = &grid.days[0].groups[0].blocks[0];
        assert_eq!(early.offset, 0.0);
        assert_eq!(early.extent, 60.0);

        let late = &grid.days[1].groups[0].blocks[0];
        assert_eq!(late.offset, 13.0 * 60.0);
        assert_eq!(late.extent, 60.0);
    }

    #[test]
    fn test_color_is_stable_per_course() {
        let a = session(1, Weekday::Monday, "08:00", "09:00");
        let mut b = session(2, Weekday::Friday, "15:00", "16:00");
        b.course_id = a.course_id;

        let grid = build_grid(&[a, b], &GridConfig::default());
        let blocks: Vec<&SessionBlock> = grid
            .days
            .iter()
            .flat_map(|d| &d.groups)
            .flat_map(|g| &g.blocks)
            .collect();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].color, blocks[1].color);
        assert_eq!(blocks[0].color, course_color(blocks[0].session.course_id));
    }
}
