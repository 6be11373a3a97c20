use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "raytrace")]
#[command(about = "Render the benchmark scene to a binary PPM")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "320")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "240")]
    pub height: u32,

    /// Output name; the image is written to <OUTPUT>.ppm
    #[arg(short, long, default_value = "raytrace")]
    pub output: String,

    /// Horizontal field of view in degrees
    #[arg(long)]
    pub fov: Option<f64>,

    /// Log level (off, error, warn, info, debug, trace); RUST_LOG overrides it
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub debug_level: LevelFilter,
}
