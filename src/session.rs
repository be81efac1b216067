//! One todo-gacha session: the task store, the gacha engine, and the
//! message line shown between them.

use serde::Serialize;

use crate::error::TaskResult;
use crate::gacha::collection::{Collection, CollectionRecord};
use crate::gacha::engine::{DrawResult, GachaEngine};
use crate::gacha::pool::GachaPool;
use crate::gacha::roll::RollSource;
use crate::tasks::{Task, TaskStore};

pub struct Session {
    tasks: TaskStore,
    gacha: GachaEngine,
    /// Last result message, empty until something happens.
    message: String,
}

/// Everything the view layer observes, in serialisable form.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub tasks: &'a [Task],
    pub tickets: u32,
    pub collection: &'a [CollectionRecord],
    pub message: &'a str,
}

impl Session {
    pub fn new() -> Self {
        Self::with_pool(GachaPool::standard())
    }

    pub fn with_pool(pool: GachaPool) -> Self {
        Self {
            tasks: TaskStore::new(),
            gacha: GachaEngine::new(pool),
            message: String::new(),
        }
    }

    pub fn add_task(&mut self, text: &str) -> bool {
        self.tasks.add(text)
    }

    pub fn toggle_task(&mut self, index: usize) -> TaskResult<()> {
        self.tasks.toggle(index)
    }

    /// Delete checked tasks and pay one ticket per deleted task.
    /// Nothing happens when no task is checked.
    pub fn remove_checked(&mut self) -> usize {
        let removed = self.tasks.remove_checked();
        if removed == 0 {
            return 0;
        }
        self.gacha.award_tickets(removed as u32);
        self.message = format!("削除した数: {} → ガチャ券 {} 枚ゲット！", removed, removed);
        log::info!(
            "tasks: removed {}, tickets now {}",
            removed,
            self.gacha.tickets()
        );
        removed
    }

    pub fn draw(&mut self, rolls: &mut dyn RollSource) -> Option<DrawResult> {
        let result = self.gacha.draw(rolls)?;
        self.message = result.message();
        Some(result)
    }

    pub fn tasks(&self) -> &TaskStore {
        &self.tasks
    }

    pub fn tickets(&self) -> u32 {
        self.gacha.tickets()
    }

    pub fn collection(&self) -> &Collection {
        self.gacha.collection()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Number of distinct items that can be collected.
    pub fn pool_len(&self) -> usize {
        self.gacha.pool().len()
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            tasks: self.tasks.tasks(),
            tickets: self.gacha.tickets(),
            collection: self.gacha.collection().records(),
            message: &self.message,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
