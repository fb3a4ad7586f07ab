use eframe::egui::{self, Margin, RichText};

use crate::state::{FilterForm, FilterState};
use crate::theme::{FilterTheme, PanelSizes};
use crate::ui_constants::{
    ISSUES_SLIDER_MAX, PULL_REQUESTS_SLIDER_MAX, STARS_SLIDER_MAX,
};
use crate::views::filters::items::{
    date_input::date_filter_section,
    label_section::label_section,
    languages_menu::{language_chips, language_picker},
    range_slider::range_slider,
};

/// Right-side filter panel. Owns the independent state pieces and re-emits
/// the aggregate snapshot through `notify` whenever any of them changes.
pub struct FilterPanel {
    form: FilterForm,
    // The first show() emits the initial snapshot once, so the embedder
    // starts out synchronized without waiting for an edit.
    primed: bool,
    // Set by reset(); the next show() emits the restored snapshot.
    dirty: bool,
}

impl Default for FilterPanel {
    fn default() -> Self {
        FilterPanel {
            form: FilterForm::default(),
            primed: false,
            dirty: false,
        }
    }
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores every piece to its default value. The next `show` emits one
    /// notification carrying the restored snapshot; the panel's own Reset
    /// button takes the same effect within its frame.
    pub fn reset(&mut self) {
        self.form.reset();
        self.dirty = true;
    }

    #[cfg(test)]
    fn form_mut(&mut self) -> &mut FilterForm {
        &mut self.form
    }

    /// Draws the panel and synchronously invokes `notify` with a fresh
    /// snapshot if anything changed this frame. Theme and sizes parameterize
    /// presentation only; they never feed into the emitted state.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        theme: &FilterTheme,
        sizes: &PanelSizes,
        notify: &mut dyn FnMut(FilterState),
    ) {
        let mut changed = !self.primed || std::mem::take(&mut self.dirty);
        self.primed = true;

        let form = &mut self.form;
        egui::SidePanel::right("filters_panel")
            .frame(
                egui::Frame::none()
                    .fill(theme.background)
                    .inner_margin(Margin::same(sizes.padding)),
            )
            .exact_width(sizes.width)
            .resizable(false)
            .show(ctx, |ui| {
                // Header: title left, reset right
                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            RichText::new("Repository filters").strong().color(theme.text),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Reset").clicked() {
                            form.reset();
                            changed = true;
                        }
                    });
                });
                ui.separator();

                // Count ranges
                if let Some(r) = range_slider(
                    ui,
                    "ISSUES COUNT",
                    &form.issues,
                    0..=ISSUES_SLIDER_MAX,
                    theme,
                    sizes.slider_height,
                ) {
                    form.issues = r;
                    changed = true;
                }
                ui.add_space(sizes.spacing);

                if let Some(r) = range_slider(
                    ui,
                    "PULL REQUEST COUNT",
                    &form.pull_requests,
                    0..=PULL_REQUESTS_SLIDER_MAX,
                    theme,
                    sizes.slider_height,
                ) {
                    form.pull_requests = r;
                    changed = true;
                }
                ui.add_space(sizes.spacing);

                if let Some(r) = range_slider(
                    ui,
                    "STARS",
                    &form.stars,
                    0..=STARS_SLIDER_MAX,
                    theme,
                    sizes.slider_height,
                ) {
                    form.stars = r;
                    changed = true;
                }

                ui.separator();

                // Languages multi-select with removable chips
                ui.add(
                    egui::Label::new(RichText::new("LANGUAGES").color(theme.weak_text()))
                        .selectable(false),
                );
                if let Some(lang) = language_picker(
                    ui,
                    "languages",
                    "Select a language...",
                    &form.languages,
                    theme,
                    sizes.input_height * 0.7,
                ) {
                    // BTreeSet insert: duplicates are impossible
                    if form.languages.insert(lang) {
                        changed = true;
                    }
                }
                if language_chips(ui, &mut form.languages, theme) {
                    changed = true;
                }

                ui.separator();

                // Date filters
                if date_filter_section(
                    ui,
                    "CREATED DATE",
                    "created",
                    &mut form.created,
                    theme,
                    sizes.input_height,
                ) {
                    changed = true;
                }
                ui.add_space(sizes.spacing);
                if date_filter_section(
                    ui,
                    "LAST PUSH DATE",
                    "last_push",
                    &mut form.last_push,
                    theme,
                    sizes.input_height,
                ) {
                    changed = true;
                }

                ui.separator();

                // Advanced label sub-filter
                if label_section(
                    ui,
                    &mut form.label_name,
                    &mut form.label_count,
                    theme,
                    sizes.slider_height,
                ) {
                    changed = true;
                }
            });

        if changed {
            notify(self.form.snapshot());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::NumericRange;
    use crate::types::{DateMode, Language};
    use chrono::NaiveDate;

    // Runs one headless frame and collects every notification it produces.
    fn run_frame(
        panel: &mut FilterPanel,
        ctx: &egui::Context,
        calls: &mut Vec<FilterState>,
    ) {
        let theme = FilterTheme::default();
        let sizes = PanelSizes::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            panel.show(ctx, &theme, &sizes, &mut |state| calls.push(state));
        });
    }

    #[test]
    fn first_show_emits_the_initial_snapshot_once() {
        let ctx = egui::Context::default();
        let mut panel = FilterPanel::new();
        let mut calls = Vec::new();

        run_frame(&mut panel, &ctx, &mut calls);
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], FilterForm::default().snapshot());
    }

    #[test]
    fn frames_without_edits_do_not_notify() {
        let ctx = egui::Context::default();
        let mut panel = FilterPanel::new();
        let mut calls = Vec::new();

        run_frame(&mut panel, &ctx, &mut calls);
        run_frame(&mut panel, &ctx, &mut calls);
        run_frame(&mut panel, &ctx, &mut calls);

        // only the initial emission; merely rendering the widgets (including
        // the unset date sections) must not fabricate changes
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].created.start, None);
        assert_eq!(calls[0].created.end, None);
        assert_eq!(calls[0].last_push.start, None);
    }

    #[test]
    fn reset_notifies_once_with_the_default_snapshot() {
        let ctx = egui::Context::default();
        let mut panel = FilterPanel::new();
        let mut calls = Vec::new();
        run_frame(&mut panel, &ctx, &mut calls);

        let form = panel.form_mut();
        form.issues = NumericRange::new(5, 50);
        form.languages.insert(Language::Rust);
        form.created.mode = DateMode::Between;
        form.created.start = NaiveDate::from_ymd_opt(2020, 1, 1);
        form.created.end = NaiveDate::from_ymd_opt(2021, 1, 1);

        panel.reset();
        run_frame(&mut panel, &ctx, &mut calls);

        // the reset touched several pieces but the frame notifies exactly once
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1], FilterForm::default().snapshot());

        // and a further frame without edits stays quiet
        run_frame(&mut panel, &ctx, &mut calls);
        assert_eq!(calls.len(), 2);
    }
}
