pub mod artist;
pub mod fields;
pub mod show;
pub mod venue;
