use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "CLIPGUARD_LOG";

/// Directive used when `CLIPGUARD_LOG` is unset.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "clipguard=debug,clipguard_core=debug,warn",
        _ => "trace",
    }
}

/// Send `tracing` output to stderr so the report on stdout stays clean.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
