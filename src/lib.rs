// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
#[cfg(feature = "gui")]
pub mod gui;
pub mod output;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scrape;
