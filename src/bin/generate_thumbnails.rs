//! 為 `video/` 中每支影片產生 `video/thumbnail/<stem>.jpg`

use anyhow::Result;
use wallpaper_assets::component::ThumbnailGenerator;
use wallpaper_assets::config::Config;
use wallpaper_assets::init;
use wallpaper_assets::signal::setup_shutdown_signal;

fn main() -> Result<()> {
    init::init();
    let config = Config::new()?;
    init::apply_locale(&config);

    ThumbnailGenerator::new(&config, setup_shutdown_signal()).run()?;
    Ok(())
}
