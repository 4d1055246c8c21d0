//! Summary-view aggregation over normalized records.
//!
//! Both aggregators partition records by a key in first-appearance
//! order and reduce each group in a single pass: per-year production
//! extremes and per-crop averages.

pub mod crops;
pub mod types;
pub mod utility;
pub mod yearly;
