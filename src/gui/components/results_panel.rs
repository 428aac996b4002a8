// src/gui/components/results_panel.rs
//
// Draws the final stage: employer cards, the no-results placeholder, or a
// load failure. Purely a view over FlowView::results.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::NO_RESULTS_TEXT;
use crate::gui::app::App;
use crate::gui::flow_view::ResultsModel;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_flow_kind();
    let Some(view) = app.views.get(&kind) else { return };

    match &view.results {
        ResultsModel::Empty => {}

        ResultsModel::NoResults => {
            ui.label(NO_RESULTS_TEXT);
        }

        ResultsModel::Error(msg) => {
            ui.colored_label(Color32::from_rgb(0xDC, 0x61, 0x49), msg);
        }

        ResultsModel::Cards(cards) => {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::remainder().clip(true))
                .header(24.0, |mut header| {
                    header.col(|ui| {
                        ui.label(RichText::new("Employer").strong());
                    });
                })
                .body(|body| {
                    body.rows(22.0, cards.len(), |mut row| {
                        let ix = row.index();
                        if let Some(card) = cards.get(ix) {
                            row.col(|ui| {
                                match &card.link {
                                    Some(link) => { ui.hyperlink_to(&card.name, link); }
                                    None => { ui.label(&card.name); }
                                }
                            });
                        }
                    });
                });
        }
    }
}
