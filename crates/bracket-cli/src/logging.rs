use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "bracket_core=info,bracket_export=info";
const VERBOSE_DIRECTIVES: &str = "bracket_core=debug,bracket_export=debug";

/// Send logs to stderr so stdout only carries the final summary line.
///
/// `RUST_LOG` takes precedence over the built-in directives.
pub fn setup_logging(verbose: bool) {
    let directives = if verbose {
        VERBOSE_DIRECTIVES
    } else {
        DEFAULT_DIRECTIVES
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}
