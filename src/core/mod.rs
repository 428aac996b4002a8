// src/core/mod.rs
pub mod filter;
pub mod net;
