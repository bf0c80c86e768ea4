//! Wire time conversion: clients send Unix epoch milliseconds

use chrono::{DateTime, Utc};
use lifttrack_common::{Error, Result};

/// Convert epoch milliseconds to a UTC timestamp
pub fn from_epoch_millis(millis: i64) -> Result<DateTime<Utc>> {
    if millis < 0 {
        return Err(Error::Validation(
            "Timestamp must not precede the Unix epoch".to_string(),
        ));
    }
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| Error::Validation(format!("Timestamp out of range: {}", millis)))
}
