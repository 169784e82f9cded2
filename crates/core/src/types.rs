use crate::error::CoreError;

/// Record identifiers are UUIDs generated by the store on insert.
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Parse a record id taken from a request path.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("Invalid id '{raw}'")))
}
