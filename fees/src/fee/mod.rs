pub mod factory;
pub mod strategy;

pub use factory::{DefaultFeeCalculationFactory, FeeCalculationFactory};
pub use strategy::FeeStrategy;
