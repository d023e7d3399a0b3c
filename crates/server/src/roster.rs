use serde::Deserialize;
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    fs,
    path::Path,
};
use uuid::Uuid;

/// On-disk roster format
///
/// Teachers, and the courses each one owns, are maintained by the
/// administrative system outside this service; it exports this shape. A
/// course appears under exactly one teacher, which is where the session
/// create path derives course ownership from.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    pub teachers: Vec<RosterTeacher>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterTeacher {
    pub id: Uuid,
    pub name: String,
    pub courses: Vec<RosterCourse>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RosterCourse {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub weekly_hours: u8,
}

/// Custom error type for roster loading
#[derive(Debug)]
pub enum RosterError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Io(e) => write!(f, "failed to read roster file: {e}"),
            Self::Parse(e) => write!(f, "failed to parse roster file: {e}"),
        }
    }
}

impl From<std::io::Error> for RosterError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for RosterError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Loads and parses a roster file
pub fn load(path: &Path) -> Result<RosterFile, RosterError> {
    let contents = fs::read_to_string(path)?;
    let roster = serde_json::from_str(&contents)?;

    Ok(roster)
}
