use clap::Parser;
use std::path::PathBuf;

use crate::config;

#[derive(Parser, Debug)]
#[command(name = "cursorshot")]
#[command(version)]
#[command(about = "Capture the monitor under the mouse cursor to a PNG", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "/etc/cursorshot.toml")]
    pub config: PathBuf,

    /// X11 display to connect to (e.g. ":0")
    #[arg(short, long)]
    pub display: Option<String>,

    /// Output PNG path
    #[arg(short, long, default_value = "screenshot.png")]
    pub output: PathBuf,

    /// Verbose logging
    #[arg(short, long, action)]
    pub verbose: bool,
}

impl Args {
    pub fn load_config(&self) -> Result<config::Config, Box<dyn std::error::Error>> {
        config::Config::load(&self.config)
    }
}
