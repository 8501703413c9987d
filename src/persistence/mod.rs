pub mod durable;
pub mod files;

pub use durable::DurableStore;
pub use files::{atomic_write, ensure_tempo_dir, get_tempo_dir, init_local_tempo};
