use log::{info, warn};

use crate::app::SketchApp;
use crate::tool::ToolKind;

/// Marker widths offered by the panel, in pt.
const PEN_SIZES: [(f32, &str); 3] = [(1.0, "1 pt"), (3.0, "3 pt"), (5.0, "5 pt")];

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.horizontal(|ui| {
                for (size, label) in PEN_SIZES {
                    let selected = app.session.tools().kind() == ToolKind::Marker
                        && app.session.tools().line_width() == size;
                    if ui.selectable_label(selected, label).clicked() {
                        info!("pen width selected: {label}");
                        app.session.select_marker_width(size);
                    }
                }
            });

            ui.separator();

            // Sliders work on copies; the session only hears about actual
            // changes, keeping tool-state mutation explicit.
            let mut hue = app.session.tools().hue();
            if ui
                .add(egui::Slider::new(&mut hue, 0.0..=359.0).text("Hue"))
                .changed()
            {
                app.session.set_hue(hue);
            }

            let mut saturation = app.session.tools().saturation();
            if ui
                .add(egui::Slider::new(&mut saturation, 0.0..=100.0).text("Saturation"))
                .changed()
            {
                app.session.set_saturation(saturation);
            }

            let mut lightness = app.session.tools().lightness();
            if ui
                .add(egui::Slider::new(&mut lightness, 0.0..=100.0).text("Lightness"))
                .changed()
            {
                app.session.set_lightness(lightness);
            }

            ui.horizontal(|ui| {
                ui.label("Color:");
                let (rect, _) =
                    ui.allocate_exact_size(egui::vec2(24.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, app.session.tools().color());
            });

            ui.separator();

            ui.label("Stickers");
            ui.horizontal_wrapped(|ui| {
                let symbols: Vec<String> = app.session.tools().catalog().to_vec();
                for symbol in &symbols {
                    if ui.button(symbol).clicked() {
                        info!("sticker selected: {symbol}");
                        app.session.select_sticker(symbol);
                    }
                }
            });
            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut app.new_sticker_text);
                if ui.button("Add Sticker").clicked() {
                    let text = app.new_sticker_text.clone();
                    if app.session.add_sticker_symbol(&text) {
                        app.new_sticker_text.clear();
                    } else {
                        warn!("ignoring empty sticker symbol");
                    }
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.session.document().can_undo();
                let can_redo = app.session.document().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.session.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.session.redo();
                }
                if ui.button("Clear").clicked() {
                    app.session.clear();
                }
            });

            if ui.button("Export to PNG").clicked() {
                app.export_dialog();
            }

            ui.separator();

            // Stack contents, oldest first.
            let document = app.session.document();
            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Committed");
                    ui.strong("Undone");
                    ui.end_row();

                    let committed = document.committed();
                    let undone = document.undone();
                    let rows = committed.len().max(undone.len());

                    for i in 0..rows {
                        match committed.get(i) {
                            Some(drawable) => ui.label(drawable.kind()),
                            None => ui.label(""),
                        };
                        match undone.get(i) {
                            Some(drawable) => ui.label(drawable.kind()),
                            None => ui.label(""),
                        };
                        ui.end_row();
                    }
                });
        });
}
