use serde::Serializer;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Milliseconds since the Unix epoch, treating a zoneless store timestamp as UTC.
/// Sub-millisecond precision is truncated toward negative infinity.
pub(crate) fn epoch_millis(value: PrimitiveDateTime) -> i64 {
    let nanos = value.assume_utc().unix_timestamp_nanos();
    nanos.div_euclid(1_000_000) as i64
}

pub(crate) fn from_epoch_millis(millis: i64) -> Option<PrimitiveDateTime> {
    let value = OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()?;
    let utc = value.to_offset(UtcOffset::UTC);
    Some(PrimitiveDateTime::new(utc.date(), utc.time()))
}

/// Serde adapter for nullable timestamp columns: `null` or epoch milliseconds.
pub(crate) mod millis_option {
    use super::*;

    pub(crate) fn serialize<S>(
        value: &Option<PrimitiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_i64(epoch_millis(*value)),
            None => serializer.serialize_none(),
        }
    }
}
