//! Domain - what a cell is, how it evolves, how the page configures and
//! edits the board

pub mod cell;
pub mod config;
pub mod input;
pub mod rules;
