use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::{EnumIter, EnumString};

/// Represents the day of the week a session is scheduled on
///
/// Days are numbered the ISO way: Monday is 1, Sunday is 7. The numeric
/// form is also the wire format, so a `Weekday` serializes as its number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, EnumIter,
    EnumString,
)]
#[serde(try_from = "u8", into = "u8")]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// The days the timetable shows by default
    pub const TEACHING_WEEK: [Self; 6] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// ISO day number, Monday = 1 through Sunday = 7
    pub fn number(self) -> u8 {
        self as u8
    }
}

/// Error for a day number outside 1-7
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOutOfRange(pub u8);

impl Display for DayOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "day of week must be 1-7, got {}", self.0)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DayOutOfRange;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            other => Err(DayOutOfRange(other)),
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.number()
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let name = match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        };

        write!(f, "{name}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_weekday_numbering() {
        assert_eq!(Weekday::Monday.number(), 1);
        assert_eq!(Weekday::Sunday.number(), 7);
        assert_eq!(Weekday::try_from(3).unwrap(), Weekday::Wednesday);
        assert_eq!(Weekday::try_from(0), Err(DayOutOfRange(0)));
        assert_eq!(Weekday::try_from(8), Err(DayOutOfRange(8)));
    }

    #[test]
    fn test_weekday_from_str() {
        assert_eq!(Weekday::from_str("Friday").unwrap(), Weekday::Friday);
        assert_eq!(Weekday::from_str("friday").unwrap(), Weekday::Friday);
        assert!(Weekday::from_str("Freitag").is_err());
    }

    #[test]
    fn test_weekday_serde_as_number() {
        let json = serde_json::to_string(&Weekday::Tuesday).unwrap();
        assert_eq!(json, "2");

        let day: Weekday = serde_json::from_str("6").unwrap();
        assert_eq!(day, Weekday::Saturday);

        assert!(serde_json::from_str::<Weekday>("9").is_err());
    }

    #[test]
    fn test_teaching_week_excludes_sunday() {
        assert_eq!(Weekday::TEACHING_WEEK.len(), 6);
        assert!(!Weekday::TEACHING_WEEK.contains(&Weekday::Sunday));
    }
}
