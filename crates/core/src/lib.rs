//! Vitrine Core - Shared domain library.
//!
//! This crate holds everything the HTTP layer delegates to:
//! - [`catalog`] - Product and catalog types loaded from the catalog document
//! - [`query`] - Query-parameter parsing and allow-list validation
//! - [`pipeline`] - The filter/sort/pagination pipeline over the catalog
//! - [`order`] - Order validation, totaling, and stamping
//! - [`error`] - The domain error taxonomy shared with the boundary layer
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no HTTP. The
//! catalog is always passed in as a read-only value; nothing here mutates it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod error;
pub mod order;
pub mod pipeline;
pub mod query;

pub use catalog::{Catalog, CategoryRef, ColorRef, Product};
pub use error::DomainError;
pub use order::{Order, OrderDraft, OrderLine, build_order};
pub use pipeline::{GoodsResult, PageEnvelope, select_goods};
pub use query::{Count, GoodsQuery, SortDirection, SortKey, ValidationMode};
