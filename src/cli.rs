use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "cube-viewer")]
#[command(about = "Spinning cube with a first-person camera", long_about = None)]
pub struct Cli {
    /// JSON file overriding the default viewer configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Exit after rendering this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Keep uniforms in CPU memory instead of a GPU buffer
    #[arg(long = "cpu-uniforms", default_value = "false")]
    pub cpu_uniforms: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long = "print-config", default_value = "false")]
    pub print_config: bool,
}
