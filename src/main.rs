use block_runner::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Alternate formatting prints the whole context chain.
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
