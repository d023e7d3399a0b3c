pub mod completion;
pub mod conflict;
pub mod grid;
pub mod roster;
pub mod session;
pub mod weekday;
