//! Console logging for the slowVerse apps

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `level`.
///
/// An unparsable level falls back to `info`. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("[slowverse] bad log level {:?}: {}", level, e);
        EnvFilter::new("info")
    });

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
    {
        tracing::debug!(level, "logging initialized");
    }
}
