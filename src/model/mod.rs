pub mod cell;
pub mod hours;

pub use cell::{format_hours, CellRange, CellRef, Column};
pub use hours::{HoursIndex, HoursSequence, TagHours};
