//! The player's collection: one record per distinct item ever drawn.

use serde::Serialize;

use super::pool::PoolEntry;
use super::rarity::Rarity;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionRecord {
    pub key: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    /// Times drawn, always >= 1.
    pub count: u32,
}

/// Records in first-drawn order. The pool is small, so lookup is a scan.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    records: Vec<CollectionRecord>,
}

impl Collection {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Insert a new record with count 1, or bump the count of an existing one.
    /// Name and rarity of an existing record are left as they are.
    /// Returns the record's count after the merge.
    pub fn merge(&mut self, item: &PoolEntry) -> u32 {
        if let Some(rec) = self.records.iter_mut().find(|r| r.key == item.key) {
            rec.count += 1;
            return rec.count;
        }
        self.records.push(CollectionRecord {
            key: item.key,
            name: item.name,
            rarity: item.rarity,
            count: 1,
        });
        1
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&CollectionRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    pub fn records(&self) -> &[CollectionRecord] {
        &self.records
    }

    /// Distinct items owned.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of counts across all records, i.e. total successful draws.
    pub fn total_drawn(&self) -> u32 {
        self.records.iter().map(|r| r.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gacha::pool::POOL;

    #[test]
    fn first_merge_inserts_count_one() {
        let mut c = Collection::new();
        assert_eq!(c.merge(&POOL[0]), 1);
        let rec = c.get(POOL[0].key).unwrap();
        assert_eq!(rec.count, 1);
        assert_eq!(rec.name, POOL[0].name);
        assert_eq!(rec.rarity, POOL[0].rarity);
    }

    #[test]
    fn same_item_twice_is_one_record() {
        let mut c = Collection::new();
        c.merge(&POOL[3]);
        assert_eq!(c.merge(&POOL[3]), 2);
        assert_eq!(c.len(), 1);
        assert_eq!(c.records()[0].count, 2);
        assert_eq!(c.records()[0].name, POOL[3].name);
    }

    #[test]
    fn records_keep_first_drawn_order() {
        let mut c = Collection::new();
        c.merge(&POOL[10]);
        c.merge(&POOL[0]);
        c.merge(&POOL[10]);
        c.merge(&POOL[17]);
        let keys: Vec<&str> = c.records().iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![POOL[10].key, POOL[0].key, POOL[17].key]);
        assert_eq!(c.total_drawn(), 4);
    }

    #[test]
    fn unknown_key_is_none() {
        let c = Collection::new();
        assert!(c.get("🐱").is_none());
        assert!(c.is_empty());
    }
}
