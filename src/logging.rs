use log::LevelFilter;

/// Initialise the global logger.
///
/// `RUST_LOG` takes precedence. Without it this crate logs at `info`
/// (`debug` when verbose) and dependencies only at `warn`.
pub fn setup_logger(verbose: bool) {
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_env("RUST_LOG");
    } else {
        let own_level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        builder.filter(None, LevelFilter::Warn);
        builder.filter(Some(env!("CARGO_CRATE_NAME")), own_level);
    }

    // Tests may install a logger more than once
    let _ = builder.try_init();
}
