// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod log;
pub mod report;
pub mod runner;
pub mod specs;
pub mod status;
pub mod store;

pub use error::{Error, Result};
