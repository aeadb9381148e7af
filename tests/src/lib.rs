#[cfg(test)]
mod ipv6;

/// Installs a fmt subscriber once, filtered through `RUST_LOG`
#[cfg(test)]
pub(crate) fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
