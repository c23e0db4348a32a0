pub mod entry;
pub mod sync;
pub mod trigger;
