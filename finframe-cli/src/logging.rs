// finframe-cli/src/logging.rs
//
// Logging uses the standard `log` crate with `env_logger` as the backend:
// RUST_LOG=info (default), RUST_LOG=debug for detail, RUST_LOG=trace for
// per-frame output.

use env_logger::Env;

/// Initializes env_logger with an info-level default.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used for default artifact names, e.g. `fish_frames_20240601_123045.feather`.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
