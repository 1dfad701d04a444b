//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `i64` - Next unique counter value
pub fn next_id() -> i64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
