pub mod entry;
pub mod fallback;
