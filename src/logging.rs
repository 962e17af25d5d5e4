use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG: &str = "CARDWISE_LOG";

/// Install the stderr subscriber. Level comes from `CARDWISE_LOG`
/// (e.g. `debug`, `cardwise::engine=trace`), defaulting to `warn`.
/// Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
