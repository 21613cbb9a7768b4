//! 依 `video/` 的內容重建 `wallpaper.json` 的 `videos` 與 `version`

use anyhow::Result;
use wallpaper_assets::component::CatalogBuilder;
use wallpaper_assets::config::Config;
use wallpaper_assets::init;

fn main() -> Result<()> {
    init::init();
    let config = Config::new()?;
    init::apply_locale(&config);

    CatalogBuilder::new(&config).run()?;
    Ok(())
}
