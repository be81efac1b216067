//! Gacha — rarity tiers, the static pool, and the draw engine.

pub mod collection;
pub mod engine;
pub mod pool;
pub mod rarity;
pub mod roll;
