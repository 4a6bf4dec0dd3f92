//! Fixed-point arithmetic used by fee accounting.

pub mod fee_growth;

pub use fee_growth::{
    FeeGrowth, FeeGrowthPair, Q128, fees_between, fees_owed, growth_for_amount, mul_div,
};
