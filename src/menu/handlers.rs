use crate::component::{CatalogBuilder, ThumbnailGenerator, VideoEncoder};
use crate::config::Config;
use crate::pause;
use anyhow::Result;
use console::{Term, style};
use log::warn;
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

fn report_error(e: &anyhow::Error) {
    warn!("Tool failed: {e:#}");
    eprintln!("{} {:#}", style(t!("common.error_prefix")).red().bold(), e);
}

pub fn run_thumbnail_generator(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    println!("{}", style(t!("thumbnail.title")).cyan().bold());
    let generator = ThumbnailGenerator::new(config, Arc::clone(shutdown_signal));

    if let Err(e) = generator.run() {
        report_error(&e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_video_encoder(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    config: &Config,
) -> Result<()> {
    println!("{}", style(t!("encoder.title")).cyan().bold());
    let encoder = VideoEncoder::new(config, Arc::clone(shutdown_signal));

    if let Err(e) = encoder.run() {
        report_error(&e);
    }

    pause(term)?;
    Ok(())
}

pub fn run_catalog_builder(term: &Term, config: &Config) -> Result<()> {
    println!("{}", style(t!("catalog.title")).cyan().bold());
    let builder = CatalogBuilder::new(config);

    if let Err(e) = builder.run() {
        report_error(&e);
    }

    pause(term)?;
    Ok(())
}
