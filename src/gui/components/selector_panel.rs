// src/gui/components/selector_panel.rs
//
// One combo box per dimension of the current flow. Disabled selectors stay
// greyed out until the cascade reaches them. A changed pick is handed to
// the cascade after drawing, which resets everything downstream.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let kind = app.current_flow_kind();
    let Some(view) = app.views.get_mut(&kind) else { return };

    let mut pick: Option<(usize, String)> = None;

    for (i, sel) in view.selectors.iter_mut().enumerate() {
        ui.horizontal(|ui| {
            // Fixed label column so the combos line up
            ui.add_sized([90.0, 18.0], egui::Label::new(sel.label));

            ui.add_enabled_ui(sel.enabled, |ui| {
                let before = sel.selected.clone();
                let shown = if sel.selected.is_empty() {
                    s!(sel.placeholder)
                } else {
                    sel.selected.clone()
                };
                let options = sel.options.clone();

                egui::ComboBox::from_id_salt((kind, sel.dim))
                    .width(240.0)
                    .selected_text(shown)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut sel.selected, s!(), sel.placeholder);
                        for opt in &options {
                            ui.selectable_value(&mut sel.selected, opt.clone(), opt);
                        }
                    });

                if sel.selected != before {
                    pick = Some((i, sel.selected.clone()));
                }
            });
        });
    }

    let Some((dim_ix, value)) = pick else { return };
    let (Some(cascade), Some(ds)) = (app.cascades.get_mut(&kind), app.datasets.get(&kind)) else {
        return;
    };

    logf!("UI: pick {:?}[{}] = {:?}", kind, dim_ix, value);
    cascade.select(
        dim_ix,
        (!value.is_empty()).then_some(value.as_str()),
        ds,
        view,
    );
}
