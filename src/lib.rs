#![deny(clippy::print_stdout)]

pub mod affinity;
pub mod command_line;
pub mod config;
pub mod docking;
pub mod error;
pub mod logs;
