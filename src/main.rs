use clap::Parser;

use wordgraph::cli::{self, Cli};
use wordgraph::observability::init_logging;

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = cli::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
