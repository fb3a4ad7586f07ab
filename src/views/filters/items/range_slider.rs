use std::ops::RangeInclusive;

use eframe::egui::{self, pos2, Color32, Rect, RichText, Rounding, Sense, Stroke, Ui, Vec2};

use crate::state::NumericRange;
use crate::theme::FilterTheme;
use crate::ui_constants::widget;

/// Stateless two-handle slider over a closed integer interval.
/// Header row: name on the left, the current `min - max` pair on the right.
/// Below: a track with two draggable thumbs. Dragging one thumb clamps at the
/// other, so the emitted range can never invert.
/// Returns Some(new_range) if changed by user interaction this frame.
pub fn range_slider(
    ui: &mut Ui,
    name: &str,
    current: &NumericRange,
    bounds: RangeInclusive<u32>,
    theme: &FilterTheme,
    height: f32,
) -> Option<NumericRange> {
    let lo = *bounds.start();
    let hi = *bounds.end();
    if hi <= lo {
        return None;
    }

    // Header: label left, current values right
    ui.horizontal(|ui| {
        ui.add(egui::Label::new(RichText::new(name).color(theme.weak_text())).selectable(false));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::Label::new(
                    RichText::new(format!("{} - {}", current.min, current.max))
                        .color(theme.text),
                )
                .selectable(false),
            );
        });
    });

    let available_width = ui.available_width();
    let track_height = widget::TRACK_HEIGHT;
    let rounding = Rounding::same(widget::ROUNDING);
    let container_height = height.clamp(28.0, 80.0);

    let (container_rect, _) = ui.allocate_exact_size(
        Vec2::new(available_width, container_height),
        Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect(
        container_rect,
        rounding,
        theme.background,
        Stroke::new(1.0, theme.border()),
    );

    // Track in the middle of the container
    let track_rect = Rect::from_min_max(
        pos2(
            container_rect.min.x + widget::TRACK_MARGIN_H,
            container_rect.center().y - track_height * 0.5,
        ),
        pos2(
            container_rect.max.x - widget::TRACK_MARGIN_H,
            container_rect.center().y + track_height * 0.5,
        ),
    );
    painter.rect(
        track_rect,
        Rounding::same(track_height * 0.5),
        theme.border().gamma_multiply(0.4),
        Stroke::new(1.0, theme.border()),
    );

    let x_at = |v: u32| -> f32 {
        let t = ((v.saturating_sub(lo)) as f32 / (hi - lo) as f32).clamp(0.0, 1.0);
        egui::lerp(track_rect.left()..=track_rect.right(), t)
    };
    let value_at = |x: f32| -> u32 {
        let x = x.clamp(track_rect.left(), track_rect.right());
        let t = if track_rect.width() > 0.0 {
            (x - track_rect.left()) / track_rect.width()
        } else {
            0.0
        };
        lo + (t * (hi - lo) as f32).round() as u32
    };

    // Interact on the whole container so both click and drag work anywhere
    let id = ui.id().with("range_slider").with(name.to_string());
    let response = ui
        .interact(container_rect, id, Sense::click_and_drag())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    // While a drag is in progress the grabbed handle is pinned, otherwise a
    // click or fresh drag grabs whichever handle is nearer to the pointer.
    let grab_id = id.with("grab_max");
    let mut changed_to: Option<NumericRange> = None;
    if response.clicked() || response.dragged() {
        if let Some(pointer) = response.interact_pointer_pos() {
            let grab_max = if response.drag_started() || response.clicked() {
                let d_min = (pointer.x - x_at(current.min)).abs();
                let d_max = (pointer.x - x_at(current.max)).abs();
                // On a tie prefer the side the pointer is on
                let grab_max = if (d_min - d_max).abs() < f32::EPSILON {
                    pointer.x > x_at(current.max)
                } else {
                    d_max < d_min
                };
                ui.memory_mut(|m| m.data.insert_temp(grab_id, grab_max));
                grab_max
            } else {
                ui.memory(|m| m.data.get_temp::<bool>(grab_id)).unwrap_or(false)
            };

            let v = value_at(pointer.x);
            let new = if grab_max {
                // upper handle cannot cross below the lower one
                NumericRange::new(current.min, v.max(current.min))
            } else {
                NumericRange::new(v.min(current.max), current.max)
            };
            if new != *current {
                changed_to = Some(new);
            }
        }
    }
    if response.drag_stopped() {
        ui.memory_mut(|m| m.data.remove::<bool>(grab_id));
    }

    // Draw using the post-interaction range for immediate visual feedback
    let shown = changed_to.as_ref().unwrap_or(current);

    // Accent fill between the two thumbs
    let active_rect = Rect::from_min_max(
        pos2(x_at(shown.min), track_rect.top()),
        pos2(x_at(shown.max), track_rect.bottom()),
    );
    painter.rect(
        active_rect,
        Rounding::same(track_height * 0.5),
        theme.primary.gamma_multiply(0.35),
        Stroke::NONE,
    );

    // Thumbs
    let thumb_size = Vec2::new(14.0, (container_height - 14.0).clamp(16.0, 26.0));
    let hovered = response.hovered();
    for v in [shown.min, shown.max] {
        let thumb_rect =
            Rect::from_center_size(pos2(x_at(v), container_rect.center().y), thumb_size);
        let fill = if hovered {
            theme.primary.gamma_multiply(0.9)
        } else {
            theme.primary
        };
        painter.rect(thumb_rect, Rounding::same(4.0), fill, Stroke::new(1.0, theme.border()));

        // Vertical grip line
        let grip_col = Color32::from_rgba_premultiplied(255, 255, 255, 110);
        painter.line_segment(
            [
                pos2(thumb_rect.center().x, thumb_rect.top() + 4.0),
                pos2(thumb_rect.center().x, thumb_rect.bottom() - 4.0),
            ],
            Stroke::new(1.0, grip_col),
        );
    }

    changed_to
}
