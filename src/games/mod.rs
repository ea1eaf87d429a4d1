//! Game implementations.

pub mod prime_sum;

pub use prime_sum::PrimeSumGame;
