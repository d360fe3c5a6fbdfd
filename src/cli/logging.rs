use tracing_subscriber::EnvFilter;

/// Default level when neither flags, config nor `RUST_LOG` say otherwise.
const DEFAULT_LEVEL: &str = "warn";

/// Install the stderr subscriber.
///
/// `RUST_LOG` wins outright. Otherwise `--verbose` means debug, `--quiet`
/// means error, then the config `[log] level`, then warn.
pub fn init(verbose: bool, quiet: bool, configured: Option<&str>) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        configured.unwrap_or(DEFAULT_LEVEL)
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("keyprofile={level},sequoia_openpgp=warn")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .try_init();
}
