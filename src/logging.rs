use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Send diagnostics to stderr so command output on stdout stays clean.
///
/// `RUST_LOG`, when set, replaces `level` entirely.
pub(crate) fn init(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
