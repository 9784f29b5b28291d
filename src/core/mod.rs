pub mod backup;
pub mod checker;
pub mod remind;
pub mod schedule;
