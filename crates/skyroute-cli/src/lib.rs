//! SkyRoute CLI library.
//!
//! This crate provides the pieces of the command-line front end that are
//! worth testing without spawning the binary: dataset loading with the
//! weather pass, and output formatting.

pub mod network;
pub mod output;
