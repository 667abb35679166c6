//! Bézier-Kurven-Editor.
//!
//! Interaktiver Editor für stückweise Bézier-Kurven (linear,
//! quadratisch, kubisch) auf egui-Basis. Punkte werden per Maus
//! gesetzt und verschoben, die Engine resampelt die Kurve nach
//! jeder Mutation vollständig neu.

use bezier_curve_editor::{ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use glam::Vec2;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bézier-Kurven-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([800.0, 800.0])
                .with_title("Bézier Curves"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier-Curve-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    overlay: ui::CurveOverlay,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
            overlay: ui::CurveOverlay::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);

        let mut has_events = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let events = self
                    .input
                    .collect_viewport_events(ui, &response, rect, &self.state);
                has_events = !events.is_empty();
                self.process_events(events);

                let cursor = ctx
                    .pointer_latest_pos()
                    .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y));
                let modifiers = ui.input(|i| i.modifiers);

                self.overlay.hover_animation(
                    &self.state.active_session().data.points,
                    cursor,
                    &self.state.options,
                );
                self.overlay.paint(
                    ui.painter(),
                    rect,
                    &self.state,
                    cursor,
                    modifiers.command && modifiers.shift,
                );
            });

        self.maybe_request_repaint(ctx, has_events);
    }
}

impl EditorApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_events: bool) {
        if has_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.overlay.is_animating(&self.state.options)
        {
            ctx.request_repaint();
        }
    }
}
