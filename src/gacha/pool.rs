//! The static item pool, partitioned by rarity.

use super::rarity::Rarity;
use crate::error::PoolError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolEntry {
    /// Unique emoji, doubles as the collection key.
    pub key: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
}

const fn entry(key: &'static str, name: &'static str, rarity: Rarity) -> PoolEntry {
    PoolEntry { key, name, rarity }
}

pub const POOL: &[PoolEntry] = &[
    // Common
    entry("🐱", "猫", Rarity::Common),
    entry("🐶", "犬", Rarity::Common),
    entry("🐦", "鳥", Rarity::Common),
    entry("🐭", "ネズミ", Rarity::Common),
    entry("🐸", "カエル", Rarity::Common),
    entry("🐰", "ウサギ", Rarity::Common),
    entry("🐢", "カメ", Rarity::Common),
    entry("🐴", "馬", Rarity::Common),
    entry("🐧", "ペンギン", Rarity::Common),
    // Rare
    entry("🦊", "狐", Rarity::Rare),
    entry("🐼", "パンダ", Rarity::Rare),
    entry("🦉", "フクロウ", Rarity::Rare),
    entry("🐨", "コアラ", Rarity::Rare),
    entry("🦁", "ライオン", Rarity::Rare),
    entry("🐯", "トラ", Rarity::Rare),
    // SSR
    entry("🐉", "ドラゴン", Rarity::Ssr),
    entry("🦄", "ユニコーン", Rarity::Ssr),
    entry("👑", "王冠", Rarity::Ssr),
];

/// A validated pool: every tier has at least one candidate and keys are unique.
#[derive(Clone, Debug)]
pub struct GachaPool {
    common: Vec<PoolEntry>,
    rare: Vec<PoolEntry>,
    ssr: Vec<PoolEntry>,
}

impl GachaPool {
    pub fn new(entries: &[PoolEntry]) -> Result<Self, PoolError> {
        for (i, e) in entries.iter().enumerate() {
            if entries[..i].iter().any(|prev| prev.key == e.key) {
                return Err(PoolError::DuplicateKey(e.key));
            }
        }

        let tier = |rarity: Rarity| -> Vec<PoolEntry> {
            entries.iter().filter(|e| e.rarity == rarity).copied().collect()
        };
        let pool = Self {
            common: tier(Rarity::Common),
            rare: tier(Rarity::Rare),
            ssr: tier(Rarity::Ssr),
        };

        for &rarity in Rarity::all() {
            if pool.candidates(rarity).is_empty() {
                return Err(PoolError::EmptyTier(rarity));
            }
        }
        Ok(pool)
    }

    /// The built-in pool. Panics at start-up if [`POOL`] is misconfigured.
    pub fn standard() -> Self {
        match Self::new(POOL) {
            Ok(pool) => pool,
            Err(e) => panic!("built-in gacha pool is invalid: {}", e),
        }
    }

    /// Entries of one tier, in table order. Never empty.
    pub fn candidates(&self, rarity: Rarity) -> &[PoolEntry] {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Rare => &self.rare,
            Rarity::Ssr => &self.ssr,
        }
    }

    /// Pick uniformly within a tier: index = floor(roll × count).
    pub fn pick(&self, rarity: Rarity, roll: f64) -> &PoolEntry {
        let candidates = self.candidates(rarity);
        let idx = ((roll * candidates.len() as f64) as usize).min(candidates.len() - 1);
        &candidates[idx]
    }

    pub fn len(&self) -> usize {
        self.common.len() + self.rare.len() + self.ssr.len()
    }
}
