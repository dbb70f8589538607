mod config;
mod demos;
mod divide;
mod email;
mod error;
mod optional;
mod registry;
mod user;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "roster",
    about = "Input-validation and user-registry demonstrations"
)]
pub struct Args {
    #[arg(value_name = "DEMO", help = "Demos to run, in order (default: all)")]
    pub demos: Vec<String>,

    #[arg(long, help = "Sample-data file path (TOML)")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "List available demos and exit")]
    pub list_demos: bool,

    #[arg(long, help = "Debug output (print loaded sample data)")]
    pub debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load sample data (built-in defaults when no file is given)
    let cfg = match &args.config {
        Some(path) => config::Config::load_from(path)?,
        None => config::Config::default(),
    };

    if let Err(issues) = cfg.validate() {
        for issue in &issues {
            eprintln!("Config error {}", issue);
        }
        return Err(anyhow::anyhow!("invalid sample data"));
    }

    // Handle --list-demos: dump the demo table and exit
    if args.list_demos {
        println!("Demos:");
        for demo in demos::DEMOS {
            println!("  {}: {}", demo.name, demo.description);
        }
        return Ok(());
    }

    if args.debug {
        eprintln!("[DEBUG] Sample data: {:?}", cfg);
    }

    demos::run(&args.demos, &cfg)
}
