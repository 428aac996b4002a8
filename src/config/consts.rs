// src/config/consts.rs

// Net config
pub const HOST: &str = "jobsatlarge.org";
pub const PREFIX: &str = "/data/";
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Local cache
pub const STORE_DIR: &str = ".store";

// Shared UI text
pub const NO_RESULTS_TEXT: &str = "No Employers Shown At This Time";
