// Demo embedding of the filter panel: owns the panel, receives each emitted
// snapshot through the notify closure, and renders the latest one as JSON in
// the central panel.

use eframe::{egui, App};

use crate::state::FilterState;
use crate::theme::{FilterTheme, PanelSizes};
use crate::views::filters::FilterPanel;

pub struct PanelApp {
    panel: FilterPanel,
    theme: FilterTheme,
    sizes: PanelSizes,
    last_state: Option<FilterState>,
    notifications: u64,
}

impl Default for PanelApp {
    fn default() -> Self {
        // Presentation config is read once at startup
        let (theme, sizes) = {
            let cfg = crate::config::PANEL_CONFIG.read().unwrap();
            (cfg.theme(), cfg.sizes())
        };
        PanelApp {
            panel: FilterPanel::new(),
            theme,
            sizes,
            last_state: None,
            notifications: 0,
        }
    }
}

impl App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Any new logs? ensure we repaint to keep the log view fresh
        if crate::logger::take_new_flag() {
            ctx.request_repaint();
        }

        let mut emitted: Option<FilterState> = None;
        self.panel
            .show(ctx, &self.theme, &self.sizes, &mut |state| {
                emitted = Some(state);
            });

        if let Some(state) = emitted {
            self.notifications += 1;
            match serde_json::to_string(&state) {
                Ok(json) => log::debug!("filters changed: {json}"),
                Err(e) => log::warn!("failed to serialize filter state: {e}"),
            }
            self.last_state = Some(state);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Emitted filter state");
            ui.label(format!("Notifications received: {}", self.notifications));
            ui.separator();
            if let Some(state) = &self.last_state {
                let json = serde_json::to_string_pretty(state)
                    .unwrap_or_else(|e| format!("<serialization error: {e}>"));
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.monospace(json);
                });
            } else {
                ui.label("No state emitted yet");
            }

            ui.separator();
            egui::CollapsingHeader::new("Recent log")
                .default_open(false)
                .show(ui, |ui| {
                    for entry in crate::logger::tail(12) {
                        let color = match entry.level {
                            log::Level::Error => egui::Color32::RED,
                            log::Level::Warn => egui::Color32::YELLOW,
                            _ => ui.visuals().weak_text_color(),
                        };
                        ui.colored_label(
                            color,
                            format!("[{:>5}] {}: {}", entry.level, entry.target, entry.msg),
                        );
                    }
                });
        });
    }
}
