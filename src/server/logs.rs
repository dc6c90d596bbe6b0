use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the global tracing subscriber.
///
/// Log levels are controlled by the `RUST_LOG` environment variable. If it is not set,
/// it defaults to `info` for all crates and `debug` for this crate.
pub fn setup_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stdout).with_target(true);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,player_roster=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
