//! Bill state and the pure computations derived from it.

pub mod bill_store;
pub mod services;

pub use bill_store::BillStore;
