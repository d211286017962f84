use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn,bevy_render=warn";

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the process-wide tracing subscriber.
///
/// `RUST_LOG` wins when set; the default filter keeps the renderer stack
/// quiet so translation diagnostics stay visible. Idempotent, and Bevy's own
/// `LogPlugin` is disabled in `main` so this is the only subscriber.
pub fn init_logging() {
    LOGGING_INITIALIZED.get_or_init(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt().with_env_filter(env_filter).try_init();
    });
}
