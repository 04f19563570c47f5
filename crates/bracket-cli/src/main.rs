mod cli;
mod logging;

use std::process::ExitCode;

use bracket_core::run_export;
use clap::Parser;
use cli::Args;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::setup_logging(args.verbose);

    let options = args.into_export_options();
    match run_export(&options).await {
        Ok(summary) => {
            println!(
                "Wrote {} games to {}",
                summary.rows_written,
                options.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
