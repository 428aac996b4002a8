// src/fetch.rs
//
// Dataset source boundary. The GUI and CLI own one source object and load
// each flow's dataset through it exactly once per activation (load-once,
// read-many). A failed load is a LoadError, never a silent empty dataset.

use thiserror::Error;

use crate::config::consts::STORE_DIR;
use crate::config::options::{AppOptions, FlowKind};
use crate::store::{self, DataSet};

#[derive(Debug, Error)]
pub enum LoadError {
    /// Backing resource could not be reached (network or local IO).
    #[error("dataset unreachable: {0}")]
    Unreachable(String),
    /// Resource was fetched but does not decode as a record array.
    #[error("dataset malformed: {0}")]
    Malformed(String),
}

pub trait DataSource {
    fn load(&self, flow: FlowKind) -> Result<DataSet, LoadError>;
}

/// Fetches `<flow>.json` from the static host, with the disk cache as a
/// fallback when the network is down. Malformed payloads are not masked by
/// the cache; a bad deploy stays visible.
pub struct HttpSource {
    offline: bool,
}

impl HttpSource {
    pub fn new(options: &AppOptions) -> Self {
        Self { offline: options.offline }
    }
}

impl DataSource for HttpSource {
    fn load(&self, flow: FlowKind) -> Result<DataSet, LoadError> {
        if self.offline {
            return store::load_dataset(&flow)
                .map_err(|e| LoadError::Unreachable(format!("{STORE_DIR}: {e}")));
        }

        match fetch_remote(flow) {
            Ok(ds) => {
                // cache, but ignore any IO error (best-effort)
                let _ = store::save_dataset(&flow, &ds);
                logf!("Fetch: {:?} ok ({} records)", flow, ds.len());
                Ok(ds)
            }
            Err(e @ LoadError::Malformed(_)) => Err(e),
            Err(e) => match store::load_dataset(&flow) {
                Ok(ds) => {
                    logd!("Fetch: {:?} unreachable ({}), using cache", flow, e);
                    Ok(ds)
                }
                Err(_) => Err(e),
            },
        }
    }
}

/// Bookkeeping for the one load the UI may have in flight. `begin` hands out
/// a ticket; `accept` admits a completion only while its ticket is still the
/// pending one, so a slow fetch can never overwrite fresher state after the
/// user has moved on.
#[derive(Debug, Default)]
pub struct LoadTracker {
    next: u64,
    pending: Option<(FlowKind, u64)>,
}

impl LoadTracker {
    pub fn new() -> Self { Self::default() }

    pub fn in_flight(&self, flow: FlowKind) -> bool {
        matches!(self.pending, Some((k, _)) if k == flow)
    }

    pub fn begin(&mut self, flow: FlowKind) -> u64 {
        self.next += 1;
        self.pending = Some((flow, self.next));
        self.next
    }

    pub fn accept(&mut self, flow: FlowKind, ticket: u64) -> bool {
        if self.pending == Some((flow, ticket)) {
            self.pending = None;
            true
        } else {
            false
        }
    }
}

fn fetch_remote(flow: FlowKind) -> Result<DataSet, LoadError> {
    let resource = join!(flow.slug(), ".json");
    let body = crate::core::net::http_get(&resource)
        .map_err(|e| LoadError::Unreachable(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| LoadError::Malformed(e.to_string()))
}
