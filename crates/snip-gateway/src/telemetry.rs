use tracing_subscriber::EnvFilter;

use crate::cli::AppEnv;

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `info`.
pub fn init(app_env: AppEnv) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match app_env {
        AppEnv::Local => builder.init(),
        AppEnv::Prod => builder.json().init(),
    }
}
