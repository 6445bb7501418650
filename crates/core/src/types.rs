/// All database primary keys are SQLite INTEGER PRIMARY KEY (rowid).
pub type DbId = i64;

/// All timestamps come from SQLite `CURRENT_TIMESTAMP`, which is UTC text
/// without an offset, so they decode as naive datetimes.
pub type Timestamp = chrono::NaiveDateTime;
