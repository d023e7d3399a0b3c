use crate::session::{Session, SessionDraft};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Why a candidate session collides with an existing one
///
/// When a session collides on both counts at once, the teacher wins: that is
/// the message the person scheduling can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictReason {
    SameTeacher,
    SameRoom,
}

impl Display for ConflictReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::SameTeacher => write!(f, "same teacher"),
            Self::SameRoom => write!(f, "same room"),
        }
    }
}

/// A collision between a candidate session and one already on the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// The existing session the candidate collides with
    pub with: Session,
    pub reason: ConflictReason,
}

impl Conflict {
    /// Short human description of the collision, without roster names
    pub fn describe(&self) -> String {
        match self.reason {
            ConflictReason::SameTeacher => format!(
                "the teacher already has a session on {} from {}",
                self.with.day, self.with.slot
            ),
            ConflictReason::SameRoom => format!(
                "room {} is already occupied on {} from {}",
                self.with.room.as_deref().unwrap_or("?"),
                self.with.day,
                self.with.slot
            ),
        }
    }
}

/// Checks a candidate session against the existing schedule
///
/// A session collides with the candidate when it is on the same day, its
/// time slot overlaps (half-open, so back-to-back sessions are fine), and it
/// either belongs to the same teacher or occupies the same assigned room.
/// Sessions with no room only collide through their teacher.
///
/// Returns the first collision by ascending start time (then end time), or
/// `None` when the candidate is clear. Pure: this is the advisory client
/// check and the authoritative store check alike, run against whatever
/// snapshot the caller holds.
pub fn detect_conflict(candidate: &SessionDraft, existing: &[Session]) -> Option<Conflict> {
    existing
        .iter()
        .filter(|s| s.day == candidate.day)
        .filter_map(|s| conflict_reason(candidate, s).map(|reason| (s, reason)))
        .min_by_key(|(s, _)| (s.slot.start, s.slot.end))
        .map(|(s, reason)| Conflict {
            with: s.clone(),
            reason,
        })
}

fn conflict_reason(candidate: &SessionDraft, existing: &Session) -> Option<ConflictReason> {
    if !candidate.slot.overlaps(existing.slot) {
        return None;
    }

    if existing.teacher_id == candidate.teacher_id {
        return Some(ConflictReason::SameTeacher);
    }

    match (&candidate.room, &existing.room) {
        (Some(a), Some(b)) if a == b => Some(ConflictReason::SameRoom),
        _ => None,
    }
}
