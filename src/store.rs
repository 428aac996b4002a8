// src/store.rs
//
// Local dataset cache under .store/, one JSON file per flow. The on-disk
// shape is the same bare array the remote resources use, so a cached file
// and a fetched body decode identically.

use std::{fs, io, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::consts::STORE_DIR;
use crate::config::options::FlowKind;
use crate::data::Record;

/// One flow's records, immutable once loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataSet {
    pub records: Vec<Record>,
}

impl DataSet {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

fn store_path(kind: &FlowKind) -> PathBuf {
    PathBuf::from(STORE_DIR).join(join!(kind.slug(), ".json"))
}

pub fn save_dataset(kind: &FlowKind, ds: &DataSet) -> io::Result<PathBuf> {
    let p = store_path(kind);

    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let text = serde_json::to_string(ds)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&p, text)?;
    Ok(p)
}

pub fn load_dataset(kind: &FlowKind) -> Result<DataSet, Box<dyn std::error::Error>> {
    let p = store_path(kind);
    let text = fs::read_to_string(&p)?;
    let ds = serde_json::from_str(&text)?;
    Ok(ds)
}
