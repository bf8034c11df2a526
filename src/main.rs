use clap::Parser;
use todos::cli::commands::Cli;
use todos::cli::handlers;
use todos::io::data_dir::resolve_data_dir;
use todos::logging::{LOG_FILE, LogTarget, init_tracing};

fn main() {
    let cli = Cli::parse();

    // The TUI owns the terminal, so it logs to a file instead of stderr
    let log_result = if cli.command.is_none() {
        let log_path = resolve_data_dir(cli.data_dir.as_deref()).join(LOG_FILE);
        init_tracing(cli.verbose, cli.quiet, LogTarget::File(&log_path))
    } else {
        init_tracing(cli.verbose, cli.quiet, LogTarget::Stderr)
    };
    if let Err(e) = log_result {
        eprintln!("warning: could not set up logging: {}", e);
    }

    if let Err(e) = handlers::dispatch(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
