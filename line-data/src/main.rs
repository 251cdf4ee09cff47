use std::process::ExitCode;

use line_data::config::{ENV_INPUT, GeneratorConfig};
use line_data::dataset::DatasetError;
use line_data::pipeline::{self, GenerateError};
use line_data::translit::Transliterator;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_tracing();

    let config = GeneratorConfig::from_env();
    let translit = Transliterator::default();

    match pipeline::run(&config, &translit) {
        Ok(summary) => {
            // Statistics go to stdout; logs go to stderr
            println!("{}", summary.report());
            println!();
            println!("=== Done! ===");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if let GenerateError::Dataset(DatasetError::NotFound { .. }) = e {
                eprintln!(
                    "Place the lines file at {} or set {ENV_INPUT}.",
                    config.input.display()
                );
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
