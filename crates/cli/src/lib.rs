//! Kerning group conversion CLI library.

pub mod cli;
pub mod io;
