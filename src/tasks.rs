//! Task store — the ordered todo list that pays out gacha tickets.

use serde::Serialize;

use crate::error::{TaskError, TaskResult};

/// A single todo row. Identity is its position in the list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Task {
    pub text: String,
    pub checked: bool,
}

#[derive(Clone, Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append an unchecked task. Blank input (after trimming) is ignored.
    ///
    /// The text is stored as entered; trimming only decides emptiness.
    /// Returns true when a task was added.
    pub fn add(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.tasks.push(Task {
            text: text.to_string(),
            checked: false,
        });
        true
    }

    /// Flip the checked flag of the task at `index`.
    pub fn toggle(&mut self, index: usize) -> TaskResult<()> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskError::IndexOutOfRange { index, len })?;
        task.checked = !task.checked;
        Ok(())
    }

    /// Drop every checked task, keeping the rest in order.
    /// Returns how many were removed.
    pub fn remove_checked(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.checked);
        before - self.tasks.len()
    }

    pub fn has_checked(&self) -> bool {
        self.tasks.iter().any(|t| t.checked)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_add_preserves_call_order(texts in prop::collection::vec("[a-z]{1,8}", 0..30)) {
            let mut store = TaskStore::new();
            for t in &texts {
                store.add(t);
            }
            let stored: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
            let expected: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
            prop_assert_eq!(stored, expected);
        }

        #[test]
        fn prop_blank_never_mutates(blank in "[ \t]{0,6}", seed in prop::collection::vec("[a-z]{1,4}", 0..5)) {
            let mut store = TaskStore::new();
            for t in &seed {
                store.add(t);
            }
            let before = store.tasks().to_vec();
            prop_assert!(!store.add(&blank));
            prop_assert_eq!(store.tasks(), &before[..]);
        }

        #[test]
        fn prop_toggle_is_involutive(
            checks in prop::collection::vec(any::<bool>(), 1..20),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut store = TaskStore::new();
            for (i, &c) in checks.iter().enumerate() {
                store.add(&format!("task {}", i));
                if c {
                    store.toggle(i).unwrap();
                }
            }
            let before = store.tasks().to_vec();
            let i = pick.index(checks.len());
            store.toggle(i).unwrap();
            store.toggle(i).unwrap();
            prop_assert_eq!(store.tasks(), &before[..]);
        }

        #[test]
        fn prop_remove_checked_partitions(checks in prop::collection::vec(any::<bool>(), 0..30)) {
            let mut store = TaskStore::new();
            for (i, &c) in checks.iter().enumerate() {
                store.add(&format!("task {}", i));
                if c {
                    store.toggle(i).unwrap();
                }
            }
            let expected: Vec<String> = checks
                .iter()
                .enumerate()
                .filter(|(_, &c)| !c)
                .map(|(i, _)| format!("task {}", i))
                .collect();
            let removed = store.remove_checked();
            prop_assert_eq!(removed, checks.iter().filter(|&&c| c).count());
            let remaining: Vec<String> = store.tasks().iter().map(|t| t.text.clone()).collect();
            prop_assert_eq!(remaining, expected);
            prop_assert!(!store.has_checked());
        }
    }
}
