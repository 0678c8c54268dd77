use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "biosync-server")]
#[command(about = "BioSync stress classification service", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "BIOSYNC_CONFIG", default_value = "config.yaml")]
    pub config: String,

    /// Listen address
    #[arg(short = 'l', long, env = "BIOSYNC_LISTEN")]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long, env = "BIOSYNC_PORT")]
    pub port: Option<u16>,

    /// Directory containing the model artifacts
    #[arg(short, long, env = "BIOSYNC_MODELS_DIR")]
    pub models_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}
