#![doc(test(attr(deny(warnings))))]

//! Bill Core keeps an in-memory collection of bills together with the views
//! derived from it: the category-filtered list, the subset of bills that fits
//! a monthly budget, and the per-month totals used for charting.
//!
//! Rendering and input handling belong to the caller, which drives a
//! [`core::BillStore`] through its mutation API.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

pub use crate::core::BillStore;
pub use crate::domain::{Bill, BillDraft, BillId};
pub use crate::errors::BillError;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Bill Core tracing initialized.");
    });
}

/// Like [`init`], but filters logs with the configured directive.
pub fn init_with(config: &config::Config) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing_with(&config.log_filter);
        tracing::info!(filter = %config.log_filter, "Bill Core tracing initialized.");
    });
}
