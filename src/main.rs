use clap::Parser;
use jest_run_it::cli::{execute_command, Cli};
use jest_run_it::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match execute_command(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("jest-run-it: {}", e);
            std::process::exit(1);
        }
    }
}
