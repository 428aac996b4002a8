// src/gui/components/mod.rs
pub mod results_panel;
pub mod selector_panel;
pub mod tabs;
