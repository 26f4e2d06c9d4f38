//! verishot - UI verification runner
//!
//! Main entry point for the CLI application.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use verishot::Config;

/// Walk the orders dashboard and capture verification screenshots
#[derive(Parser, Debug)]
#[command(name = "verishot")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Root URL of the running application
    #[arg(long, short = 'u')]
    base_url: Option<String>,

    /// Directory to write screenshots into
    #[arg(long, short = 'o')]
    output_dir: Option<PathBuf>,

    /// Login password
    #[arg(long)]
    password: Option<String>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Skip the optional edit-order modal check
    #[arg(long)]
    skip_edit_modal: bool,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_directive = if args.debug {
        "verishot=debug"
    } else {
        "verishot=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .init();

    if args.init_config {
        let path = Config::default().save()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(base_url) = args.base_url {
        config.target.base_url = base_url;
    }

    if let Some(output_dir) = args.output_dir {
        config.output.dir = output_dir;
    }

    if let Some(password) = args.password {
        config.target.password = password;
    }

    if args.headed {
        config.browser.headless = false;
    }

    if args.skip_edit_modal {
        config.checks.edit_modal = false;
    }

    verishot::runner::run(&config).await?;

    println!("🎉 All screens verified.");
    Ok(())
}
