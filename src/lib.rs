//! Piecework — build-time piece assembler.
//!
//! Reads a recipe of specification files, loads each piece's header, source,
//! and license fragments relative to the file that declared it, and collects
//! the pieces into one [`core::Registry`] for a later composition step.

pub mod cli;
pub mod core;
