//! Todo list store
//!
//! The in-memory list, synchronized with one LocalStorage slot. The slot is
//! read once at load and overwritten whole after every mutation; malformed
//! stored data falls back to the fixed default list without surfacing an
//! error.

use crate::ids::IdSource;
use crate::storage::StorageBackend;
use crate::todo::{TodoItem, default_todos};

/// Ordered todo list backed by a persistent slot.
pub struct TodoStore<S, I> {
    storage: S,
    ids: I,
    todos: Vec<TodoItem>,
}

/// Decode a stored slot value as a todo list.
///
/// The only error class in the system; `load` collapses it to the default
/// list. Kept separate so the ignore-and-default policy is one visible
/// decision.
fn decode_todos(raw: &str) -> Result<Vec<TodoItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

impl<S: StorageBackend, I: IdSource> TodoStore<S, I> {
    /// LocalStorage key
    pub const STORAGE_KEY: &'static str = "pm-frontend-todos";

    /// Read the slot and adopt its list, or seed the defaults.
    ///
    /// Absent or malformed stored data never raises; the slot is rewritten
    /// immediately so it mirrors memory from the start of the session.
    pub fn load(storage: S, ids: I) -> Self {
        let todos = match storage.get(Self::STORAGE_KEY) {
            Some(raw) => match decode_todos(&raw) {
                Ok(todos) => {
                    log::info!("Loaded {} todos", todos.len());
                    todos
                }
                Err(err) => {
                    log::warn!("Ignoring malformed stored todos: {err}");
                    default_todos()
                }
            },
            None => {
                log::info!("No stored todos, seeding defaults");
                default_todos()
            }
        };

        let store = Self {
            storage,
            ids,
            todos,
        };
        store.save();
        store
    }

    /// Current list, insertion order.
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Serialize the whole list and overwrite the slot.
    pub fn save(&self) {
        if let Ok(json) = serde_json::to_string(&self.todos) {
            self.storage.set(Self::STORAGE_KEY, &json);
            log::info!("Saved {} todos", self.todos.len());
        }
    }

    /// Append a new item with a fresh id; whitespace-only text is a no-op.
    pub fn add(&mut self, raw_text: &str) {
        let trimmed = raw_text.trim();
        if trimmed.is_empty() {
            return;
        }
        let id = self.ids.next_id();
        self.todos.push(TodoItem::new(id, trimmed));
        self.save();
    }

    /// Flip the completion flag on the matching item; no-op on unknown id.
    pub fn toggle(&mut self, id: &str) {
        if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
            todo.done = !todo.done;
            self.save();
        }
    }

    /// Remove the matching item; no-op on unknown id.
    pub fn remove(&mut self, id: &str) {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() != before {
            self.save();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UuidIds;
    use crate::storage::MemoryStorage;
    use proptest::prelude::*;

    const KEY: &str = "pm-frontend-todos";

    fn fresh_store(storage: &MemoryStorage) -> TodoStore<&MemoryStorage, UuidIds<rand_pcg::Pcg64>> {
        TodoStore::load(storage, UuidIds::seeded(1))
    }

    #[test]
    fn test_load_seeds_defaults_when_absent() {
        let storage = MemoryStorage::new();
        let store = fresh_store(&storage);
        let texts: Vec<_> = store.todos().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Next.js", "React", "Tailwind CSS", "shadcn/ui"]);
        assert!(store.todos().iter().all(|t| !t.done));
    }

    #[test]
    fn test_load_adopts_stored_list() {
        let storage = MemoryStorage::with_slot(KEY, r#"[{"id":"a","text":"X","done":true}]"#);
        let store = fresh_store(&storage);
        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0], TodoItem {
            id: "a".into(),
            text: "X".into(),
            done: true,
        });
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        let storage = MemoryStorage::with_slot(KEY, "not json");
        let store = fresh_store(&storage);
        assert_eq!(store.todos().len(), 4);
    }

    #[test]
    fn test_load_falls_back_on_non_array() {
        let storage = MemoryStorage::with_slot(KEY, r#"{"not":"an array"}"#);
        let store = fresh_store(&storage);
        assert_eq!(store.todos().len(), 4);
        // The rewritten slot now holds the defaults
        let slot = storage.get(KEY).unwrap();
        assert_eq!(decode_todos(&slot).unwrap().len(), 4);
    }

    #[test]
    fn test_add_whitespace_is_noop() {
        let storage = MemoryStorage::new();
        let mut store = fresh_store(&storage);
        let slot_before = storage.get(KEY);
        store.add("   ");
        assert_eq!(store.todos().len(), 4);
        assert_eq!(storage.get(KEY), slot_before);
    }

    #[test]
    fn test_add_appends_trimmed_item() {
        let storage = MemoryStorage::new();
        let mut store = fresh_store(&storage);
        let seen: Vec<_> = store.todos().iter().map(|t| t.id.clone()).collect();

        store.add("  Rust  ");
        assert_eq!(store.todos().len(), 5);
        let added = store.todos().last().unwrap();
        assert_eq!(added.text, "Rust");
        assert!(!added.done);
        assert!(!seen.contains(&added.id));
    }

    #[test]
    fn test_toggle_flips_done() {
        let storage = MemoryStorage::new();
        let mut store = fresh_store(&storage);
        store.toggle("react");
        assert!(store.todos().iter().find(|t| t.id == "react").unwrap().done);
        store.toggle("react");
        assert!(!store.todos().iter().find(|t| t.id == "react").unwrap().done);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let storage = MemoryStorage::new();
        let mut store = fresh_store(&storage);
        let before = store.todos().to_vec();
        store.toggle("nope");
        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn test_remove_twice_is_noop_the_second_time() {
        let storage = MemoryStorage::new();
        let mut store = fresh_store(&storage);
        store.remove("tailwind");
        assert_eq!(store.todos().len(), 3);
        store.remove("tailwind");
        assert_eq!(store.todos().len(), 3);
    }

    #[test]
    fn test_slot_mirrors_memory_after_mutations() {
        let storage = MemoryStorage::new();
        let mut store = fresh_store(&storage);
        store.add("Rust");
        store.toggle("next");
        store.remove("shadcn");
        let snapshot = store.todos().to_vec();
        drop(store);

        let reloaded = TodoStore::load(&storage, UuidIds::seeded(2));
        assert_eq!(reloaded.todos(), snapshot.as_slice());
    }

    proptest! {
        #[test]
        fn prop_save_load_round_trip(texts in proptest::collection::vec("[A-Za-z0-9 ]{1,12}", 0..8)) {
            let storage = MemoryStorage::new();
            let mut store = fresh_store(&storage);
            for text in &texts {
                store.add(text);
            }
            let snapshot = store.todos().to_vec();
            drop(store);

            let reloaded = TodoStore::load(&storage, UuidIds::seeded(3));
            prop_assert_eq!(reloaded.todos(), snapshot.as_slice());
        }

        #[test]
        fn prop_toggle_twice_is_identity(texts in proptest::collection::vec("[a-z]{1,8}", 1..6), pick in 0usize..32) {
            let storage = MemoryStorage::new();
            let mut store = fresh_store(&storage);
            for text in &texts {
                store.add(text);
            }
            let id = store.todos()[pick % store.todos().len()].id.clone();
            let before = store.todos().to_vec();
            store.toggle(&id);
            store.toggle(&id);
            prop_assert_eq!(store.todos(), before.as_slice());
        }
    }
}
