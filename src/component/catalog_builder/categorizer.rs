//! 檔名分類與顯示名稱

use crate::config::{Category, KeywordTable};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// 連續的有大小寫字母；數字、底線、撇號等都會切斷一段
static REGEX_CASED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{Lu}\p{Ll}\p{Lt}]+").expect("Invalid regex"));

/// 依分類順序比對關鍵字，回傳第一個命中的分類
///
/// 比對前檔名轉為小寫；`order` 中的備用分類（misc）不參與比對，
/// 全部未命中時才回傳它
#[must_use]
pub fn category_for(filename: &str, table: &KeywordTable, order: &[Category]) -> Category {
    let filename_lower = filename.to_lowercase();

    order
        .iter()
        .filter(|category| !category.is_fallback())
        .find(|&&category| {
            table
                .iter()
                .filter(|(c, _)| *c == category)
                .flat_map(|(_, keywords)| keywords.iter())
                .any(|keyword| filename_lower.contains(keyword))
        })
        .copied()
        .unwrap_or(Category::Misc)
}

/// 檔名轉為顯示名稱：去除副檔名、連字號換成空白，再把每段連續字母的
/// 第一個字母大寫、其餘小寫（`no_hyphen` → `No_Hyphen`，`2nd` → `2Nd`）
#[must_use]
pub fn display_name(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);

    let spaced = stem.replace('-', " ");
    REGEX_CASED_RUN
        .replace_all(&spaced, |caps: &regex::Captures<'_>| title_case_word(&caps[0]))
        .into_owned()
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CATEGORY_KEYWORDS;

    fn categorize(filename: &str) -> Category {
        category_for(filename, CATEGORY_KEYWORDS, &Category::ALL)
    }

    #[test]
    fn test_keyword_match() {
        assert_eq!(categorize("Zenitsu-Run.mp4"), Category::Anime);
        assert_eq!(categorize("minecraft-village.webm"), Category::Games);
        assert_eq!(categorize("bmw-drift.mkv"), Category::Cars);
        assert_eq!(categorize("sakura-field.mov"), Category::Nature);
        assert_eq!(categorize("medieval-town.avi"), Category::Fantasy);
    }

    #[test]
    fn test_no_match_is_misc() {
        assert_eq!(categorize("unknown-thing.webm"), Category::Misc);
        assert_eq!(categorize(""), Category::Misc);
    }

    #[test]
    fn test_first_category_in_order_wins() {
        // anime 與 nature 都命中
        assert_eq!(categorize("anime-sunset.mp4"), Category::Anime);
        // cars 與 nature 都命中
        assert_eq!(categorize("porsche-mountain-road.mp4"), Category::Cars);
        // games 與 fantasy 都命中
        assert_eq!(categorize("minecraft-castle.mp4"), Category::Games);
        // nature 與 fantasy 都命中
        assert_eq!(categorize("samurai-cherry-tree.mp4"), Category::Nature);
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "fog" 出現在 "foggy" 裡
        assert_eq!(categorize("foggy-morning.mp4"), Category::Nature);
        // "gta" 只要是子字串就算
        assert_eq!(categorize("GTA6-Trailer.MP4"), Category::Games);
    }

    #[test]
    fn test_custom_order_changes_result() {
        let order = [Category::Nature, Category::Anime, Category::Misc];
        assert_eq!(
            category_for("anime-sunset.mp4", CATEGORY_KEYWORDS, &order),
            Category::Nature
        );
        // 不在順序中的分類不參與比對
        assert_eq!(
            category_for("bmw-drift.mkv", CATEGORY_KEYWORDS, &order),
            Category::Misc
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("blue-archive-arona.mp4"), "Blue Archive Arona");
        assert_eq!(display_name("Zenitsu-Run.mp4"), "Zenitsu Run");
        assert_eq!(display_name("BMW-drift.mkv"), "Bmw Drift");
        assert_eq!(display_name("no_hyphen.webm"), "No_Hyphen");
    }

    #[test]
    fn test_display_name_non_letters_start_new_word() {
        assert_eq!(display_name("2nd-place.mp4"), "2Nd Place");
        assert_eq!(display_name("it's-fine.mp4"), "It'S Fine");
        assert_eq!(display_name("GTA6-Trailer.MP4"), "Gta6 Trailer");
        // 沒有大小寫的字元不切斷也不改變
        assert_eq!(display_name("東京-night.mov"), "東京 Night");
    }

    #[test]
    fn test_display_name_keeps_spacing_and_inner_dots() {
        assert_eq!(display_name("double--dash.mp4"), "Double  Dash");
        assert_eq!(display_name("v1.2-clip.mov"), "V1.2 Clip");
    }
}
