//! `assistant-swap`: swap the legacy GeckoBot widget for the Omniverse assistant.

mod cli_config;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use assistant_swap::SwapReport;

#[derive(Debug, Parser)]
#[command(name = "assistant-swap", version, about, styles = output::clap_styles())]
struct Cli {
    /// HTML page to clean [default: index.html]
    #[arg(short, long, env = "ASSISTANT_SWAP_INPUT")]
    input: Option<PathBuf>,

    /// Where to write the cleaned page, replacing any existing file [default: index_clean.html]
    #[arg(short, long, env = "ASSISTANT_SWAP_OUTPUT")]
    output: Option<PathBuf>,

    /// Print a per-rule summary and enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli_config::load_swap_config();
    let (input, output_path) = config.resolve(cli.input, cli.output);

    match assistant_swap::run(&input, &output_path) {
        Ok(report) => {
            output::success(format!(
                "Cleaned {} saved as {}",
                input.display(),
                output_path.display()
            ));
            if cli.verbose {
                print_summary(&report);
            }
        }
        Err(err) => {
            output::error(err);
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so stdout only carries the confirmation line.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "assistant_swap=debug"
    } else {
        "assistant_swap=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(report: &SwapReport) {
    output::header("Legacy rules:");
    for outcome in &report.rules {
        output::label(outcome.rule, outcome.matches);
    }
    output::header("Assistant:");
    output::label("insertions", report.insertions);
    output::label("bytes written", report.bytes_written);
}
