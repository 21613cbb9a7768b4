use serde::Serialize;
use std::fmt;

/// 桌布分類，順序即輸出順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Anime,
    Games,
    Cars,
    Nature,
    Fantasy,
    Misc,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Anime,
        Self::Games,
        Self::Cars,
        Self::Nature,
        Self::Fantasy,
        Self::Misc,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Anime => "anime",
            Self::Games => "games",
            Self::Cars => "cars",
            Self::Nature => "nature",
            Self::Fantasy => "fantasy",
            Self::Misc => "misc",
        }
    }

    #[must_use]
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Misc)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type KeywordTable = [(Category, &'static [&'static str])];

pub const CATEGORY_KEYWORDS: &KeywordTable = &[
    (
        Category::Anime,
        &[
            "anime",
            "arona",
            "bocchi",
            "blue-archive",
            "chainsaw",
            "cowboy-bebop",
            "demon-slayer",
            "evangelion",
            "goku",
            "hatsune",
            "itachi",
            "jujutsu",
            "kimetsu",
            "luffy",
            "miku",
            "momo",
            "naruto",
            "neko",
            "neon-genesis",
            "one-piece",
            "okarun",
            "shinobu",
            "zenitsu",
            "wuthering-waves",
            "zenless-zone-zero",
            "arknights",
            "muse-dash",
            "your-name",
            "princess-mononoke",
            "bocchi-the-rock",
            "virtual-youtuber",
            "magical-girl",
        ],
    ),
    (
        Category::Games,
        &["minecraft", "call-of-duty", "grand-theft-auto", "gta"],
    ),
    (Category::Cars, &["bmw", "porsche", "mclaren", "drifting"]),
    (
        Category::Nature,
        &[
            "mountain", "lake", "sunset", "sunrise", "sakura", "cherry", "valley", "fog",
            "campfire", "field", "garden", "tree", "river",
        ],
    ),
    (
        Category::Fantasy,
        &[
            "fantasy",
            "medieval",
            "castle",
            "astronaut",
            "space",
            "ufo",
            "samurai",
            "pirate",
        ],
    ),
    (Category::Misc, &[]),
];
