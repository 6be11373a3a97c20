//! Renders the benchmark scene and writes it out as `<output>.ppm`.

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use raytrace_simple::{Canvas, Scene};

use crate::cli::Args;
use crate::logger::init_logger;

mod cli;
mod logger;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger(args.debug_level);

    let mut scene = Scene::benchmark()?;
    if let Some(fov) = args.fov {
        scene.set_field_of_view(fov);
    }

    let mut canvas = Canvas::new(args.width, args.height, args.output.as_str());
    let start = Instant::now();
    scene.render(&mut canvas)?;

    let path = canvas.save()
        .with_context(|| format!("saving {}.ppm", canvas.name()))?;
    info!(target: "app", "Wrote {} in {:?}", path.display(), start.elapsed());
    Ok(())
}
