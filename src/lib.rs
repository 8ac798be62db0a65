//! PM Todos - a localStorage-backed todo list widget
//!
//! Core modules:
//! - `todo`: Item model and the fixed default list
//! - `storage`: Persistence port (LocalStorage on web, in-memory fake elsewhere)
//! - `ids`: Injectable id generation
//! - `store`: The list store - load/save/add/toggle/remove

pub mod ids;
pub mod storage;
pub mod store;
pub mod todo;

pub use ids::{IdSource, UuidIds};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;
pub use storage::{MemoryStorage, StorageBackend};
pub use store::TodoStore;
pub use todo::{TodoItem, default_todos};
