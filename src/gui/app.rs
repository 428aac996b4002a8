// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::mpsc,
    thread,
};

use eframe::egui;

use crate::{
    cascade::Cascade,
    config::{
        options::{AppOptions, FlowKind},
        state::AppState,
    },
    fetch::{DataSource, HttpSource, LoadError, LoadTracker},
    flows::{self, Flow},
    store::DataSet,
};

use super::{components, flow_view::FlowView};

/// Completion ticket for one dataset load. The app applies a completion
/// only if it still matches the pending (flow, generation) pair; a slow
/// fetch must never overwrite fresher state.
type LoadDone = (FlowKind, u64, Result<DataSet, LoadError>);

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Employer Finder",
        options,
        Box::new(|cc| {
            let mut app = App::new(AppState::default());
            app.enter_flow(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // per-flow cascade machines + their view models
    pub cascades: HashMap<FlowKind, Cascade>,
    pub views: HashMap<FlowKind, FlowView>,

    // canonical datasets, loaded once per flow
    pub datasets: HashMap<FlowKind, DataSet>,

    pub status: String,

    // dataset load in flight (worker thread writes to done_tx)
    loads: LoadTracker,
    done_tx: mpsc::Sender<LoadDone>,
    done_rx: mpsc::Receiver<LoadDone>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (done_tx, done_rx) = mpsc::channel();

        let mut cascades = HashMap::new();
        let mut views = HashMap::new();
        for f in flows::all_flows() {
            cascades.insert(f.kind(), Cascade::new(*f));
            views.insert(f.kind(), FlowView::new(*f));
        }

        logf!("Init: {} flows, default flow={:?}",
            flows::all_flows().len(),
            flows::all_flows()[state.gui.current_flow_index].kind());

        Self {
            state,
            cascades,
            views,
            datasets: HashMap::new(),
            status: s!("Idle"),
            loads: LoadTracker::new(),
            done_tx,
            done_rx,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_flow_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_flow_index = idx; }

    #[inline]
    pub fn current_flow(&self) -> &'static dyn Flow { flows::all_flows()[self.current_index()] }

    #[inline]
    pub fn current_flow_kind(&self) -> FlowKind { self.current_flow().kind() }

    /// Activate the current flow tab: restart its cascade from the loaded
    /// dataset, or kick off a load if it has none yet.
    pub fn enter_flow(&mut self, ctx: &egui::Context) {
        let kind = self.current_flow_kind();
        if let Some(ds) = self.datasets.get(&kind) {
            if let (Some(cascade), Some(view)) =
                (self.cascades.get_mut(&kind), self.views.get_mut(&kind))
            {
                cascade.begin(ds, view);
                self.status = format!("{}: {} record(s)", cascade.flow().title(), ds.len());
            }
        } else {
            self.begin_load(ctx, kind);
        }
    }

    fn begin_load(&mut self, ctx: &egui::Context, kind: FlowKind) {
        if self.loads.in_flight(kind) {
            return;
        }

        let generation = self.loads.begin(kind);
        self.status = format!("Loading {}…", flows::flow_for(kind).title());
        logf!("Load: begin {:?} (gen {})", kind, generation);

        let offline = self.state.options.offline;
        let tx = self.done_tx.clone();
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let source = HttpSource::new(&AppOptions { offline });
            let res = source.load(kind);
            let _ = tx.send((kind, generation, res));
            ctx2.request_repaint();
        });
    }

    /// Apply finished loads. Completions whose ticket no longer matches the
    /// pending load are discarded.
    fn poll_loads(&mut self) {
        while let Ok((kind, generation, res)) = self.done_rx.try_recv() {
            if !self.loads.accept(kind, generation) {
                logd!("Load: stale completion {:?} (gen {}), discarded", kind, generation);
                continue;
            }

            match res {
                Ok(ds) => {
                    logf!("Load: {:?} ready ({} records)", kind, ds.len());
                    self.datasets.insert(kind, ds);
                    if self.current_flow_kind() == kind {
                        if let (Some(ds), Some(cascade), Some(view)) = (
                            self.datasets.get(&kind),
                            self.cascades.get_mut(&kind),
                            self.views.get_mut(&kind),
                        ) {
                            cascade.begin(ds, view);
                            self.status = format!("{}: {} record(s)", cascade.flow().title(), ds.len());
                        }
                    }
                }
                Err(e) => {
                    loge!("Load: {:?} failed: {}", kind, e);
                    if let (Some(cascade), Some(view)) =
                        (self.cascades.get_mut(&kind), self.views.get_mut(&kind))
                    {
                        cascade.load_failed(view);
                    }
                    self.status = format!("Load failed: {}", flows::flow_for(kind).title());
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loads();

        egui::TopBottomPanel::top("flows").show(ctx, |ui| {
            components::tabs::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::selector_panel::draw(ui, self);

            ui.separator();

            components::results_panel::draw(ui, self);
        });
    }
}
