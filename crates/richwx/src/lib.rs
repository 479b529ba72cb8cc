//! # richwx
//!
//! National Weather Service alerts, drawn in the terminal.
//!
//! The binary is a thin wrapper: parse a [`cli::Cli`], hand it to [`run`],
//! print what comes back. Everything that talks to the network goes through
//! [`api::AlertSource`], so handlers can be exercised against canned alerts.

pub mod api;
pub mod cli;
pub mod commands;
pub mod settings;
pub mod states;

pub use commands::run;
