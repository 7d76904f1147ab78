// ============================================================================
// Logging Setup
// Opt-in tracing subscriber installation
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber at `level`.
///
/// Fails if a global subscriber is already set.
pub fn init_tracing(level: Level) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .map_err(|e| format!("Failed to install tracing subscriber: {}", e))
}
