mod config;
mod error;
mod geometry;
mod icon;
mod utils;

use anyhow::Context;
use config::ICON_TARGETS;
use icon::create_icon;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Generating app icons...");
    for target in ICON_TARGETS {
        create_icon(target.size, target.filename)
            .with_context(|| format!("failed to generate {}", target.filename))?;
    }

    println!("\n✓ All icons generated successfully!");
    Ok(())
}
