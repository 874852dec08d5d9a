//! relmatch-engine
//!
//! Relevance scoring of release notes against a resource inventory. The
//! stages run in a fixed order per (resource type, release) pair: taxonomy
//! rejection (`taxonomy`), alias matching (`field`), score modifiers
//! (`modifiers`), then thresholding and ordering (`ranking`). `augment`
//! merges external annotations into finished results.

pub mod augment;
pub mod field;
pub mod modifiers;
pub mod ranking;
pub mod taxonomy;

pub use augment::{apply_annotations, augment};
pub use ranking::{score, score_with_regions, RankingEngine};
pub use taxonomy::{category_conflicts, category_of, Category};
