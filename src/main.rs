//! `tinylink` entry point.
//!
//! ```bash
//! # Start the HTTP server (default)
//! cargo run -- serve
//!
//! # Print the short code a URL would get, without a server
//! cargo run -- code example.com https://rust-lang.org
//!
//! # Validate and print the configuration
//! cargo run -- config
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use tinylink::config::{self, Config};
use tinylink::server;
use tinylink::utils::code_generator::generate_code;
use tinylink::utils::url_normalizer::normalize_url;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener with deterministic short codes.
#[derive(Parser)]
#[command(name = "tinylink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,

    /// Print the normalized URL and short code for each argument
    Code {
        /// URLs to encode
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Validate the configuration and print a summary
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let config = config::load_from_env()?;
            init_tracing(&config);
            config.print_summary();
            server::run(config).await
        }
        Commands::Code { urls } => print_codes(&urls),
        Commands::Config => {
            let config = config::load_from_env()?;
            init_tracing(&config);
            config.print_summary();
            Ok(())
        }
    }
}

/// Installs the global subscriber in the configured format.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_codes(urls: &[String]) -> Result<()> {
    let mut failed = 0usize;

    for url in urls {
        match normalize_url(url) {
            Ok(normalized) => println!("{}\t{}", generate_code(&normalized), normalized),
            Err(e) => {
                eprintln!("{url}: {e}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} URL(s) could not be encoded");
    }

    Ok(())
}
