// src/main.rs

use dart_action::{cli, github, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("dart-action error: {err:?}");
        std::process::exit(1);
    }

    match run(args).await {
        // The entry point's exit code is relayed verbatim, zero or not.
        Ok(code) => std::process::exit(code),
        // Setup failures (dependency fetch, spawn errors) are reported to
        // the runner as an error annotation and fail the action.
        Err(err) => {
            github::set_failed(&err.to_string());
            std::process::exit(1);
        }
    }
}
