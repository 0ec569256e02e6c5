//! Time-driven pulse animators
//!
//! Both variants are stateless: every tick they resample a sine oscillator
//! at the elapsed time and overwrite the previous frame's value.

pub mod emission;
pub mod oscillator;
pub mod scale;

pub use emission::*;
pub use oscillator::*;
pub use scale::*;
