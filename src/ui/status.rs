//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;
use crate::core::CurveType;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let session = state.active_session();

            let type_name = match session.data.curve_type() {
                CurveType::Linear => "Linear",
                CurveType::Quadratic => "Quadratisch",
                CurveType::Cubic => "Kubisch",
            };
            ui.label(format!("Kurve: {}", type_name));

            ui.separator();

            ui.label(format!(
                "Punkte: {} | Samples: {}",
                session.data.point_count(),
                session.engine.curve_points().len()
            ));

            ui.separator();

            ui.label(format!("Sampledichte: {:.0}", session.data.smooth_factor));

            if session.data.is_closed_loop {
                ui.separator();
                ui.label("Geschlossen");
            }

            if let Some(index) = state.selected_point {
                ui.separator();
                let role = if session.data.curve_type().is_anchor(index) {
                    "Anker"
                } else {
                    "Steuerpunkt"
                };
                ui.label(format!("Selektiert: {} {}", role, index));
            }

            // Tastenbelegung (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(
                        "Ctrl+Klick: Anker | Ctrl+Shift+Klick: Einfügen | \
                         D: Löschen | C: Schließen | M: Kurventyp | H: Punkte | B: Primitiv",
                    )
                    .weak(),
                );
            });
        });
    });
}
