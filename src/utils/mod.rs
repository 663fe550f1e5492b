// Utils compartidos

pub mod constants;
pub mod i18n;
pub mod storage;

pub use constants::*;
pub use i18n::{t, Language};
pub use storage::{BrowserStore, KeyValueStore, MemoryStore};
