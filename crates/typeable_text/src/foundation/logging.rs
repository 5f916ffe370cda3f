//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system from `RUST_LOG`
pub fn init() {
    env_logger::init();
}

/// Initialize logging with an explicit default level
///
/// `RUST_LOG` still overrides the level when set. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init_with_level(level: log::LevelFilter) {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}
