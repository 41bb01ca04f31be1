//! The reconciliation pipeline: fetch → clean → enrich → filter.

pub mod account;
pub mod clean;
pub mod columns;
pub mod enrich;
pub mod fetch;
pub mod filter;
pub mod mapping;
pub mod normalize;
pub mod pipeline;

pub use pipeline::{AccountViews, load_account_views};
