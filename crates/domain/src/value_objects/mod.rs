pub mod epoch;
pub mod fee_amounts;
pub mod tick_range;

pub use epoch::Epoch;
pub use fee_amounts::FeeAmounts;
pub use tick_range::TickRange;
