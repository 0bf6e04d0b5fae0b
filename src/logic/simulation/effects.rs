//! Effect Keyword Table
//!
//! Step descriptions are lower-cased and matched by plain substring against
//! this table. A step may trigger zero, one or several effects.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Mark every file icon encrypted (stays set for the playback)
    EncryptFiles,
    /// Show the ransom-note popup
    ShowRansomNote,
    /// Desktop background -> compromised color
    CompromiseWallpaper,
    /// Dim, then restore opacity after the flash delay
    FlashDesktop,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::EncryptFiles => "encrypt_files",
            Effect::ShowRansomNote => "show_ransom_note",
            Effect::CompromiseWallpaper => "compromise_wallpaper",
            Effect::FlashDesktop => "flash_desktop",
        }
    }
}

/// (keywords, effect) in evaluation order
pub const EFFECT_KEYWORDS: &[(&[&str], Effect)] = &[
    (&["encrypt", "encrypting"], Effect::EncryptFiles),
    (&["ransom", "note"], Effect::ShowRansomNote),
    (&["wallpaper"], Effect::CompromiseWallpaper),
    (&["payload", "dropping"], Effect::FlashDesktop),
];

/// Effects triggered by one step description
pub fn effects_for(desc: &str) -> Vec<Effect> {
    let desc = desc.to_lowercase();
    EFFECT_KEYWORDS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| desc.contains(k)))
        .map(|(_, effect)| *effect)
        .collect()
}
