//! Gacha engine — ticket accounting, weighted draw, collection merge.

use super::collection::Collection;
use super::pool::GachaPool;
use super::rarity::Rarity;
use super::roll::RollSource;

/// Outcome of one successful draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawResult {
    pub key: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    /// Count of this item in the collection after the draw.
    pub count: u32,
    /// Tickets remaining after the draw.
    pub tickets_left: u32,
}

impl DrawResult {
    pub fn message(&self) -> String {
        format!(
            "{} {} を手に入れた！残りガチャ券: {}",
            self.key, self.name, self.tickets_left
        )
    }
}

pub struct GachaEngine {
    pool: GachaPool,
    tickets: u32,
    collection: Collection,
}

impl GachaEngine {
    pub fn new(pool: GachaPool) -> Self {
        Self {
            pool,
            tickets: 0,
            collection: Collection::new(),
        }
    }

    pub fn award_tickets(&mut self, n: u32) {
        self.tickets = self.tickets.saturating_add(n);
    }

    /// Spend one ticket on a draw. With no tickets this does nothing and
    /// consumes no rolls.
    ///
    /// Two rolls are taken: the first picks the tier, the second the item.
    pub fn draw(&mut self, rolls: &mut dyn RollSource) -> Option<DrawResult> {
        if self.tickets == 0 {
            return None;
        }

        let rarity = Rarity::from_roll(rolls.roll());
        let item = *self.pool.pick(rarity, rolls.roll());
        let count = self.collection.merge(&item);
        self.tickets -= 1;

        let result = DrawResult {
            key: item.key,
            name: item.name,
            rarity: item.rarity,
            count,
            tickets_left: self.tickets,
        };
        log::info!(
            "gacha: drew {} {} ({}), x{}, {} tickets left",
            result.key,
            result.name,
            result.rarity.label(),
            result.count,
            result.tickets_left
        );
        Some(result)
    }

    pub fn tickets(&self) -> u32 {
        self.tickets
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub fn pool(&self) -> &GachaPool {
        &self.pool
    }
}
