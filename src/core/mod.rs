//! Core - grid storage, the random source and the wall clock

pub mod clock;
pub mod grid;
pub mod random;
