use chrono::NaiveDate;
use eframe::egui::{self, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::state::DateFilter;
use crate::theme::FilterTheme;
use crate::types::DateMode;

use super::segmented_panel::segmented_panel;

/// One date filter section: mode selector plus one date picker, or two
/// pickers when the mode is Between. Switching the mode away from Between
/// deliberately leaves a previously chosen end date in place; it simply stops
/// being surfaced by the second picker.
/// Returns true if any part of the filter changed this frame.
pub fn date_filter_section(
    ui: &mut Ui,
    name: &str,
    key: &str,
    filter: &mut DateFilter,
    theme: &FilterTheme,
    input_height: f32,
) -> bool {
    let mut changed = segmented_panel(ui, name, &mut filter.mode, theme, input_height * 0.6);

    ui.add_space(2.0);
    ui.horizontal(|ui| {
        let start_label = if filter.mode == DateMode::Between {
            "Start date"
        } else {
            "Date"
        };
        let start_key = format!("{key}_start");
        if optional_date_picker(ui, &start_key, start_label, &mut filter.start, theme) {
            changed = true;
        }

        if filter.mode == DateMode::Between {
            let end_key = format!("{key}_end");
            if optional_date_picker(ui, &end_key, "End date", &mut filter.end, theme) {
                changed = true;
            }
        }
    });

    changed
}

/// A date picker over an optional date. While unset it renders an explicit
/// "Set date" button, so "no date" and "today" stay distinguishable; the
/// button seeds the state with today, which the picker then refines. Once
/// set, a small clear button unsets it again.
fn optional_date_picker(
    ui: &mut Ui,
    key: &str,
    label: &str,
    value: &mut Option<NaiveDate>,
    theme: &FilterTheme,
) -> bool {
    let mut changed = false;

    ui.add(egui::Label::new(RichText::new(label).color(theme.weak_text()).size(11.0)).selectable(false));

    if let Some(date) = value.as_mut() {
        let resp = ui.add(DatePickerButton::new(date).id_source(key).show_icon(true));
        if resp.changed() {
            changed = true;
        }
    }

    if value.is_some() {
        let clear = ui
            .small_button(RichText::new("×").color(theme.secondary))
            .on_hover_text("Clear date");
        if clear.clicked() {
            *value = None;
            changed = true;
        }
    } else {
        let set = ui.button(RichText::new("Set date").size(12.0));
        if set.clicked() {
            *value = Some(chrono::Local::now().date_naive());
            changed = true;
        }
    }

    changed
}
