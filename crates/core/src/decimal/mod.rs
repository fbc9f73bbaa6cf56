//! Exact decimal arithmetic for money values.

pub mod service;

#[cfg(test)]
mod props;

pub use service::{DecimalService, MONEY_SCALE, RoundingMode};
