pub mod artist;
pub mod outcome;
pub mod show;
pub mod venue;

pub use outcome::{InsertOutcome, ShowInsert};
