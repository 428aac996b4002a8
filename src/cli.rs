// src/cli.rs
//
// Non-interactive cascade step: given a flow and a prefix of picks, print
// either the next dimension's options or the final employer list.

use std::env;

use crate::config::consts::NO_RESULTS_TEXT;
use crate::config::options::{AppOptions, FlowKind};
use crate::core::filter::{distinct_sorted_values, filter_records};
use crate::data::{FilterState, ResultsView};
use crate::fetch::{DataSource, HttpSource};
use crate::flows;

pub struct Params {
    pub flow: FlowKind,
    pub picks: Vec<(String, String)>, // dimension order, validated in run()
    pub offline: bool,
    pub list_dims: bool,
}

impl Params {
    pub fn new() -> Self {
        Self {
            flow: FlowKind::Regions,
            picks: Vec::new(),
            offline: false,
            list_dims: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let params = parse_cli()?;
    let flow = flows::flow_for(params.flow);
    let dims = flow.dimensions();

    if params.list_dims {
        for d in dims {
            println!("{d}");
        }
        return Ok(());
    }

    // Picks must be a contiguous prefix of the flow's dimension order.
    let mut state = FilterState::new();
    for (i, (dim, value)) in params.picks.iter().enumerate() {
        match dims.get(i) {
            Some(&expected) if expected == dim.as_str() => state.push(dim, value),
            Some(&expected) => {
                return Err(format!(
                    "Pick #{} must be {} (got {}); order for {} is {}",
                    i + 1, expected, dim, flow.title(), dims.join(" → ")
                ).into());
            }
            None => return Err(format!("Too many picks: {} takes {}", flow.title(), dims.len()).into()),
        }
    }

    let source = HttpSource::new(&AppOptions { offline: params.offline });
    let ds = source.load(params.flow)?;

    if state.len() == dims.len() {
        // Complete: print employer cards.
        let cards = ResultsView::from_filter(&ds.records, &state).cards();
        if cards.is_empty() {
            println!("{NO_RESULTS_TEXT}");
        } else {
            for c in cards {
                println!("{}\t{}", c.name, c.link.as_deref().unwrap_or(""));
            }
        }
    } else {
        // Partial: print the next dimension's options.
        let next_ix = state.len();
        let values = match flow.fixed_options(next_ix) {
            Some(fixed) => fixed.iter().map(|v| s!(*v)).collect(),
            None => distinct_sorted_values(filter_records(&ds.records, &state), dims[next_ix]),
        };
        for v in values {
            println!("{v}");
        }
    }

    Ok(())
}

fn parse_cli() -> Result<Params, Box<dyn std::error::Error>> {
    let mut params = Params::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--flow" | "-f" => {
                let v = args.next().ok_or("Missing value for --flow")?;
                params.flow = FlowKind::from_slug(&v.to_ascii_lowercase())
                    .ok_or_else(|| format!("Unknown flow: {}", v))?;}
            "--pick" | "-p" => {
                let v = args.next().ok_or("Missing value for --pick")?;
                let (dim, value) = v.split_once('=')
                    .ok_or_else(|| format!("--pick wants Dimension=Value, got: {}", v))?;
                params.picks.push((s!(dim), s!(value)));}
            "--offline" => params.offline = true,
            "--list-dims" => params.list_dims = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(params)
}
