use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

pub const FALLBACK_TIP: &str =
    "Maintain balanced hydration and consult a professional for concerns.";

/// Skin types with a canned recommendation. Parsing is case-sensitive and
/// matches the label strings the model bundle ships with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum SkinType {
    Normal,
    Dry,
    Oily,
    Combination,
}

impl SkinType {
    pub fn tip(self) -> &'static str {
        match self {
            SkinType::Normal => "Maintain a simple, consistent routine.",
            SkinType::Dry => "Use hydrating serums and rich moisturizers twice daily.",
            SkinType::Oily => "Use gentle foaming cleansers; avoid heavy creams.",
            SkinType::Combination => "Balance oily T-zone with light moisturizers.",
        }
    }
}

pub fn tip_for_label(label: &str) -> &'static str {
    SkinType::from_str(label).map_or(FALLBACK_TIP, SkinType::tip)
}
