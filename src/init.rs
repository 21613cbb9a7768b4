use crate::config::Config;

/// 初始化日誌，預設等級為 info，可用 `RUST_LOG` 覆寫
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();
}

/// 套用設定中的介面語言
pub fn apply_locale(config: &Config) {
    rust_i18n::set_locale(config.settings.language.as_str());
}
