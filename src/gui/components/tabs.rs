// src/gui/components/tabs.rs
//
// Renders the flow tabs and performs the switch itself. Switching restarts
// the target flow's cascade (datasets stay loaded; picks do not survive
// navigation).

use eframe::egui;

use crate::flows;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let all = flows::all_flows();
        let cur = app.current_index();

        for (idx, flow) in all.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, flow.title()).clicked() && !selected {
                let prev = app.current_flow_kind();
                app.set_current_index(idx);
                logf!("UI: Tab switch {:?} → {:?}", prev, flow.kind());

                let ctx = ui.ctx().clone();
                app.enter_flow(&ctx);
            }
        }
    });
}
