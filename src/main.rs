// src/main.rs

use gwatch::{cli, logging, run};
use tracing::error;

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("gwatch error: {err:?}");
        std::process::exit(1);
    }

    if let Err(err) = run(args).await {
        error!("{err}");
        std::process::exit(err.exit_code());
    }
}
