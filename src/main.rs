use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use yaml_bump::cli::{self, BumpArgs};
use yaml_bump::version::IncrementKind;
use yaml_bump::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "yaml-bump",
    version,
    about = "Increment semantic versions stored under a key in a YAML file"
)]
struct Args {
    #[arg(help = "YAML file for version incremental update")]
    file: PathBuf,

    #[arg(help = "YAML key that contains version to increment")]
    key: String,

    #[arg(
        long = "inc_type",
        value_enum,
        help = "Incremental type [default: patch, or the configured value]"
    )]
    inc_type: Option<IncrementKind>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview what would change without writing the file")]
    dry_run: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let bump_args = BumpArgs {
        file: args.file,
        key: args.key,
        inc_type: args.inc_type.unwrap_or(config.bump.inc_type),
        dry_run: args.dry_run || config.behavior.dry_run,
    };

    match cli::process(&bump_args) {
        Ok(_) => Ok(()),
        Err(e) if e.is_not_found() => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
        // Malformed documents and I/O failures end the process uncaught.
        Err(e) => Err(e.into()),
    }
}
