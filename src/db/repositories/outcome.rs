/// Result of a guarded insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(i32),
    /// A row with the same identifying fields already exists; carries its id.
    Duplicate(i32),
}

/// Result of a show insert, which needs both parties to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowInsert {
    Inserted(i32),
    MissingArtist,
    MissingVenue,
}
