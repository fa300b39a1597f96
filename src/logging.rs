use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber on stderr so stdout only carries the report.
/// Filter comes from `RUST_LOG`, `warn` otherwise.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
