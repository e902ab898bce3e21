use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use workboard::{config, tui};

#[derive(Parser, Debug)]
#[command(name = "workboard")]
#[command(about = "Kanban view of a GitHub Project, grouped by Status")]
#[command(version)]
struct Args {
    /// User or organization that owns the project
    owner: String,

    /// Project number (as shown in the project URL)
    project_number: u32,

    /// Path to config file
    #[arg(long, short)]
    config: Option<PathBuf>,
}

/// Log to a file; stdout belongs to the alternate screen.
fn init_logging() -> Result<()> {
    let path = config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("workboard=info".parse()?),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging() {
        eprintln!("workboard: logging disabled: {e:#}");
    }

    let config = config::load(args.config.as_deref())?;

    tui::run(config, args.owner, args.project_number).await
}
