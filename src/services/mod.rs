//! Service layer for Fundsheet
//!
//! The live item set, the summary rollup and record capture. Everything
//! here is synchronous and free of I/O.

pub mod capture;
pub mod item_store;
pub mod summary;

pub use capture::RecordFactory;
pub use item_store::ItemStore;
pub use summary::{category_total, summarize};
