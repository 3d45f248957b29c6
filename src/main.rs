use std::process;

use clap::Parser;

use diffpath::cli::{self, Cli};

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version print to stdout and exit 0; every real
            // usage error goes to stderr and exits 1.
            let _ = err.print();
            process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(err) = cli::run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
