// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cascade;
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod fetch;
pub mod flows;
pub mod gui;
pub mod store;
