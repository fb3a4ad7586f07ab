use eframe::egui::{self, RichText, TextEdit, Ui};

use crate::state::NumericRange;
use crate::theme::FilterTheme;
use crate::ui_constants::LABEL_COUNT_SLIDER_MAX;

use super::range_slider::range_slider;

/// Collapsible advanced sub-filter: a free-text label name plus a count
/// range. Returns true if either piece changed this frame.
pub fn label_section(
    ui: &mut Ui,
    name: &mut String,
    count: &mut NumericRange,
    theme: &FilterTheme,
    slider_height: f32,
) -> bool {
    let mut changed = false;

    egui::CollapsingHeader::new(
        RichText::new("Advanced filter: labels").color(theme.weak_text()),
    )
    .default_open(false)
    .show(ui, |ui| {
        let resp = ui.add_sized(
            [ui.available_width(), 0.0],
            TextEdit::singleline(name).hint_text("Label name"),
        );
        if resp.changed() {
            changed = true;
        }

        ui.add_space(4.0);
        if let Some(new_range) = range_slider(
            ui,
            "LABEL COUNT",
            count,
            0..=LABEL_COUNT_SLIDER_MAX,
            theme,
            slider_height,
        ) {
            *count = new_range;
            changed = true;
        }
    });

    changed
}
