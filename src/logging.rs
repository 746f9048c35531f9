use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn filter_from_config(config: &Config) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Installs a `tracing` subscriber that writes to stderr at the configured
/// level.
///
/// Stdout stays reserved for postfix and result lines. If a global
/// subscriber is already installed the call does nothing, so calling it more
/// than once is harmless.
pub fn init_logging(config: &Config) {
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter_from_config(config))
                                              .with_writer(std::io::stderr)
                                              .with_target(true)
                                              .without_time()
                                              .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
