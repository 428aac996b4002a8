// src/config/options.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
    Regions,
    Industries,
    DatePosted,
}

impl FlowKind {
    /// Stable name used for cache filenames and CLI args.
    pub fn slug(&self) -> &'static str {
        match self {
            FlowKind::Regions    => "regions",
            FlowKind::Industries => "industries",
            FlowKind::DatePosted => "date-posted",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s {
            "regions"             => Some(FlowKind::Regions),
            "industries"          => Some(FlowKind::Industries),
            "date-posted" | "dateposted" => Some(FlowKind::DatePosted),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Skip the network and serve datasets from the local cache only.
    pub offline: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self { offline: false }
    }
}
