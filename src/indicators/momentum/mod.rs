//! Momentum indicators: fast stochastic oscillator

pub mod stochastic;

pub use stochastic::*;
