// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod flow_view;

pub use app::run;
