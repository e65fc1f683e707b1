//! cursorshot - Main entry point
//!
//! Stand-in for the host runtime: owns the messenger, registers the
//! screenshot channel, invokes captureScreen through it and writes the
//! result to a PNG file.

mod args;
mod capture;
mod channel;
mod config;

use args::Args;
use base64::Engine;
use capture::X11Grabber;
use channel::{register_screenshot_plugin, Messenger, MethodResponse};
use clap::Parser;
use config::Config;
use log::{error, info, warn};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before logger init so the configured level can
    // serve as the fallback filter
    let config_result = args.load_config();
    let mut config = match &config_result {
        Ok(cfg) => cfg.clone(),
        Err(_) => Config::default(),
    };

    // Initialize logging: CURSORSHOT_LOG wins, then --verbose, then config
    let log_level = if args.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    env_logger::Builder::new()
        .parse_filters(&std::env::var("CURSORSHOT_LOG").unwrap_or(log_level))
        .init();

    info!("cursorshot v{}", env!("CARGO_PKG_VERSION"));
    if let Err(e) = config_result {
        warn!("Failed to load config: {}, using defaults", e);
    }

    // Apply command line overrides
    if let Some(ref display) = args.display {
        config.display.display = Some(display.clone());
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e);
    }

    // The messenger is owned here for the process lifetime; the channel
    // binding stays alive until exit.
    let mut messenger = Messenger::new();
    let grabber = X11Grabber::new(config.display.display.clone());
    register_screenshot_plugin(&mut messenger, &config.channel.name, grabber);
    info!("Screenshot handler bound to channel {}", config.channel.name);

    match messenger.invoke(&config.channel.name, "captureScreen") {
        MethodResponse::Success(value) => {
            let width = value["width"].as_u64().unwrap_or(0) as u32;
            let height = value["height"].as_u64().unwrap_or(0) as u32;
            let pixels = base64::engine::general_purpose::STANDARD
                .decode(value["pixels"].as_str().unwrap_or_default())?;
            info!("Captured {}x{} ({} bytes)", width, height, pixels.len());
            write_png(&args.output, width, height, pixels)?;
            info!("Wrote {}", args.output.display());
            Ok(())
        }
        MethodResponse::Error { code, message } => {
            error!("Capture failed: {} ({})", message, code);
            Err(message.into())
        }
        MethodResponse::NotImplemented => {
            error!("Channel does not implement captureScreen");
            Err("captureScreen not implemented".into())
        }
    }
}

fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
) -> Result<(), Box<dyn std::error::Error>> {
    use image::{ImageBuffer, Rgba};

    let image = ImageBuffer::<Rgba<u8>, _>::from_vec(width, height, pixels)
        .ok_or("pixel buffer does not match image dimensions")?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
