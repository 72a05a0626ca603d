use crate::error::{Result, SyncError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global `tracing` subscriber.
///
/// `filter` takes `EnvFilter` directives (`LoggingSettings::filter`).
/// Fails if the directives do not parse or a subscriber is already set.
pub fn init_tracing(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .map_err(|e| SyncError::Config(format!("Invalid log filter: {e}")))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| SyncError::Config(format!("Failed to install log subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_filter() {
        let result = init_tracing("shelf_sync=loudest");
        assert!(matches!(result, Err(SyncError::Config(msg)) if msg.contains("log filter")));
    }
}
