//! 以 NVENC 將 `video/` 中的影片重新編碼到輸出資料夾

use anyhow::Result;
use wallpaper_assets::component::VideoEncoder;
use wallpaper_assets::config::Config;
use wallpaper_assets::init;
use wallpaper_assets::signal::setup_shutdown_signal;

fn main() -> Result<()> {
    init::init();
    let config = Config::new()?;
    init::apply_locale(&config);

    VideoEncoder::new(&config, setup_shutdown_signal()).run()?;
    Ok(())
}
