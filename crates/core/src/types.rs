/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Monotonically increasing token attached to each outbound query.
///
/// A response is applied only when its token still equals the most
/// recently issued one, which is how stale responses are detected.
pub type RequestToken = u64;
