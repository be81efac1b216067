//! Rarity tiers and the fixed drop-rate table.

use ratzilla::ratatui::style::Color;
use serde::Serialize;

/// Upper bound (exclusive) of the roll that lands on `Common` — 65%.
pub const COMMON_THRESHOLD: f64 = 0.65;
/// Upper bound (exclusive) of the roll that lands on `Rare` — 25%.
/// Everything at or above this is `Ssr` — 10%.
pub const RARE_THRESHOLD: f64 = 0.90;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Ssr,
}

impl Rarity {
    /// All tiers, most likely first.
    pub fn all() -> &'static [Rarity] {
        &[Rarity::Common, Rarity::Rare, Rarity::Ssr]
    }

    /// Map a uniform roll in `[0, 1)` to a tier.
    ///
    /// The thresholds are fixed and independent of how many items each
    /// tier holds.
    pub fn from_roll(r: f64) -> Rarity {
        if r < COMMON_THRESHOLD {
            Rarity::Common
        } else if r < RARE_THRESHOLD {
            Rarity::Rare
        } else {
            Rarity::Ssr
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Ssr => "ssr",
        }
    }

    /// Frame colour of a collection card.
    pub fn color(&self) -> Color {
        match self {
            Rarity::Common => Color::Green,
            Rarity::Rare => Color::Blue,
            Rarity::Ssr => Color::Red,
        }
    }

    /// Nominal probability of this tier.
    pub fn probability(&self) -> f64 {
        match self {
            Rarity::Common => COMMON_THRESHOLD,
            Rarity::Rare => RARE_THRESHOLD - COMMON_THRESHOLD,
            Rarity::Ssr => 1.0 - RARE_THRESHOLD,
        }
    }
}
