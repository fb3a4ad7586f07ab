use std::collections::BTreeSet;

use eframe::egui::{
    self as egui, pos2, Id, Key, Modifiers, Rounding, ScrollArea, Sense, Stroke, TextEdit, Ui,
    Vec2,
};
use strum::IntoEnumIterator;

use crate::theme::FilterTheme;
use crate::types::Language;
use crate::ui_constants::{spacing, widget};

/// Multi-select dropdown over the closed language enumeration, with inline
/// search and a popup list. Already-selected languages are not offered again,
/// so duplicates are impossible by construction.
/// Returns Some(language) when the user picks one, otherwise None.
pub fn language_picker(
    ui: &mut Ui,
    key: &str,
    placeholder: &str,
    selected: &BTreeSet<Language>,
    theme: &FilterTheme,
    input_height: f32,
) -> Option<Language> {
    let rounding = Rounding::same(widget::ROUNDING);
    let border_color = theme.border();
    let hover_bg = theme.text.gamma_multiply(0.05);

    // Dropdown container
    let available_width = ui.available_width();
    let height = input_height.clamp(24.0, 50.0);
    let (container_rect, response) =
        ui.allocate_exact_size(Vec2::new(available_width, height), Sense::click());
    let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
    let painter = ui.painter();

    painter.rect(
        container_rect,
        rounding,
        theme.background,
        Stroke::new(1.0, border_color),
    );
    if response.hovered() {
        painter.rect(
            container_rect.shrink2(Vec2::new(2.0, 2.0)),
            rounding,
            hover_bg,
            Stroke::NONE,
        );
    }

    // Search text persisted between frames
    let search_id: Id = Id::new(("language_picker", "search", key.to_string()));
    let mut q = ui
        .memory(|m| m.data.get_temp::<String>(search_id))
        .unwrap_or_default();

    // Selected row for keyboard navigation
    let sel_id: Id = Id::new(("language_picker", "sel", key.to_string()));
    let mut sel_idx: usize = ui.memory(|m| m.data.get_temp::<usize>(sel_id)).unwrap_or(0);

    // Inline TextEdit inside the container (reserve space for the caret)
    let inner_rect = container_rect.shrink2(Vec2::new(12.0, 6.0));
    let arrow_space = 18.0;
    let edit_rect = egui::Rect::from_min_max(
        inner_rect.min,
        pos2(inner_rect.max.x - arrow_space, inner_rect.max.y),
    );
    let mut edit_response: Option<egui::Response> = None;
    ui.allocate_ui_at_rect(edit_rect, |ui| {
        let r = ui.add_sized(
            [edit_rect.width(), ui.spacing().interact_size.y],
            TextEdit::singleline(&mut q).hint_text(placeholder).frame(false),
        );
        edit_response = Some(r);
    });
    ui.memory_mut(|m| {
        m.data.insert_temp(search_id, q.clone());
    });

    // Caret clickable area
    let cx = container_rect.right() - 14.0;
    let cy = container_rect.center().y + 1.0;
    let w = 8.0;
    let h = 5.0;
    let arrow_rect = egui::Rect::from_center_size(pos2(cx, cy), Vec2::new(18.0, 16.0));
    let arrow_resp = ui
        .interact(
            arrow_rect,
            ui.id().with("language_picker_arrow").with(key.to_string()),
            Sense::click(),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    // Open/close popup state
    let popup_id: Id = Id::new(("language_picker", "popup", key.to_string()));
    let mut is_open = ui
        .memory(|m| m.data.get_temp::<bool>(popup_id))
        .unwrap_or(false);

    if arrow_resp.clicked() {
        is_open = !is_open;
        if is_open {
            sel_idx = 0;
        }
    } else if response.clicked() {
        if is_open {
            is_open = false;
        } else {
            is_open = true;
            sel_idx = 0;
            if let Some(id) = edit_response.as_ref().map(|r| r.id) {
                ui.memory_mut(|m| m.request_focus(id));
            }
        }
    }
    if let Some(r) = &edit_response {
        if r.clicked() || r.has_focus() || r.changed() {
            if r.changed() {
                sel_idx = 0;
            }
            is_open = true;
        }
    }
    ui.memory_mut(|m| {
        m.data.insert_temp(popup_id, is_open);
        m.data.insert_temp(sel_id, sel_idx);
    });

    // Caret and active border depending on open state
    let caret_col = if is_open {
        theme.text
    } else {
        theme.weak_text()
    };
    let painter = ui.painter();
    if is_open {
        painter.line_segment(
            [pos2(cx - w * 0.5, cy + h * 0.5), pos2(cx, cy - h * 0.5)],
            Stroke::new(1.5, caret_col),
        );
        painter.line_segment(
            [pos2(cx + w * 0.5, cy + h * 0.5), pos2(cx, cy - h * 0.5)],
            Stroke::new(1.5, caret_col),
        );
        painter.rect_stroke(container_rect, rounding, Stroke::new(1.0, theme.primary));
    } else {
        painter.line_segment(
            [pos2(cx - w * 0.5, cy - h * 0.5), pos2(cx, cy + h * 0.5)],
            Stroke::new(1.5, caret_col),
        );
        painter.line_segment(
            [pos2(cx + w * 0.5, cy - h * 0.5), pos2(cx, cy + h * 0.5)],
            Stroke::new(1.5, caret_col),
        );
    }

    // Popup with the filtered language list
    let mut pick: Option<Language> = None;
    if is_open {
        let popup_pos = pos2(container_rect.left(), container_rect.bottom() + spacing::SMALL);
        let popup_width = container_rect.width();

        let ql = q.to_lowercase();
        let items: Vec<Language> = Language::iter()
            .filter(|l| !selected.contains(l))
            .filter(|l| ql.is_empty() || l.display_name().to_lowercase().contains(&ql))
            .collect();
        if items.is_empty() {
            sel_idx = 0;
        }
        if sel_idx >= items.len() {
            sel_idx = items.len().saturating_sub(1);
        }

        // Keyboard navigation while popup is open
        let (down, up, enter, esc) = ui.input_mut(|i| {
            (
                i.consume_key(Modifiers::NONE, Key::ArrowDown),
                i.consume_key(Modifiers::NONE, Key::ArrowUp),
                i.consume_key(Modifiers::NONE, Key::Enter),
                i.consume_key(Modifiers::NONE, Key::Escape),
            )
        });
        if down && !items.is_empty() {
            sel_idx = (sel_idx + 1).min(items.len().saturating_sub(1));
        }
        if up && !items.is_empty() {
            sel_idx = sel_idx.saturating_sub(1);
        }
        if enter && !items.is_empty() {
            pick = Some(items[sel_idx]);
        }
        if esc {
            ui.memory_mut(|m| {
                m.data.insert_temp(popup_id, false);
            });
        }
        ui.memory_mut(|m| {
            m.data.insert_temp(sel_id, sel_idx);
        });

        let inner = crate::views::ui_helpers::show_popup_area(
            ui,
            popup_id,
            popup_pos,
            popup_width,
            theme.background,
            border_color,
            rounding,
            |ui| {
                ScrollArea::vertical()
                    .max_height(widget::POPUP_MAX_HEIGHT)
                    .show(ui, |ui| {
                        ui.set_width(popup_width - spacing::MEDIUM);
                        if items.is_empty() {
                            ui.add(
                                egui::Label::new(
                                    egui::RichText::new("No matching language")
                                        .color(theme.weak_text()),
                                )
                                .selectable(false),
                            );
                        }
                        for (i, lang) in items.iter().enumerate() {
                            let row_height = ui.spacing().interact_size.y * 1.2;
                            let (row_rect, row_resp) = ui.allocate_exact_size(
                                Vec2::new(ui.available_width(), row_height),
                                Sense::click(),
                            );
                            let row_p = ui.painter();

                            if row_resp.hovered() || i == sel_idx {
                                row_p.rect(
                                    row_rect.shrink2(Vec2::new(2.0, 2.0)),
                                    rounding,
                                    hover_bg,
                                    Stroke::NONE,
                                );
                            }

                            row_p.text(
                                pos2(row_rect.left() + spacing::MEDIUM, row_rect.center().y),
                                egui::Align2::LEFT_CENTER,
                                lang.display_name(),
                                egui::FontId::proportional(14.0),
                                theme.text,
                            );

                            let row_resp = row_resp.on_hover_cursor(egui::CursorIcon::PointingHand);
                            if row_resp.hovered() {
                                // sync keyboard selection with mouse hover
                                ui.memory_mut(|m| {
                                    m.data.insert_temp(sel_id, i);
                                });
                                sel_idx = i;
                            }
                            if row_resp.clicked() {
                                pick = Some(*lang);
                            }
                        }
                    });
            },
        );

        if pick.is_some() {
            // Close popup and clear search after a pick
            ui.memory_mut(|m| {
                m.data.insert_temp(popup_id, false);
                m.data.insert_temp(search_id, String::new());
                m.data.insert_temp(sel_id, 0usize);
            });
        }

        // Close when clicking outside both the input container and the popup
        let popup_rect = inner.response.rect;
        if crate::views::ui_helpers::clicked_outside(ui, &[popup_rect, container_rect]) {
            ui.memory_mut(|m| {
                m.data.insert_temp(popup_id, false);
            });
        }
    }

    pick
}

/// Removable chips for the current selection. Clicking a chip removes that
/// language from the set. Returns true if the selection changed this frame.
pub fn language_chips(
    ui: &mut Ui,
    selected: &mut BTreeSet<Language>,
    theme: &FilterTheme,
) -> bool {
    let mut to_remove: Option<Language> = None;
    ui.horizontal_wrapped(|ui| {
        for lang in selected.iter() {
            let chip = egui::Button::new(
                egui::RichText::new(format!("{} ×", lang.display_name()))
                    .color(theme.secondary)
                    .size(12.0),
            )
            .fill(theme.secondary.gamma_multiply(0.12))
            .stroke(Stroke::new(1.0, theme.secondary.gamma_multiply(0.5)))
            .rounding(Rounding::same(10.0));
            if ui.add(chip).clicked() {
                to_remove = Some(*lang);
            }
        }
    });
    if let Some(lang) = to_remove {
        selected.remove(&lang);
        true
    } else {
        false
    }
}
