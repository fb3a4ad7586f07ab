use eframe::egui::{self, pos2, Align2, FontId, Rect, RichText, Rounding, Sense, Stroke, Ui, Vec2};
use strum::{EnumCount, IntoEnumIterator};

use crate::theme::FilterTheme;
use crate::ui_constants::widget;
use crate::views::filters::SegmentLabel;

/// Stateless segmented selector:
/// - Header row: name on the left, current value on the right.
/// - Below: clickable segments for all enum variants.
/// Returns true when the user clicked a different segment this frame.
pub fn segmented_panel<T>(
    ui: &mut Ui,
    name: &str,
    current: &mut T,
    theme: &FilterTheme,
    height: f32,
) -> bool
where
    T: IntoEnumIterator + EnumCount + SegmentLabel + PartialEq + Clone,
{
    // Header: label left, current value right
    ui.horizontal(|ui| {
        ui.add(egui::Label::new(RichText::new(name).color(theme.weak_text())).selectable(false));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::Label::new(RichText::new(current.segment_label()).color(theme.text))
                    .selectable(false),
            );
        });
    });

    let count = T::COUNT;
    let available_width = ui.available_width();
    let height = height.clamp(24.0, 40.0);
    let rounding = Rounding::same(widget::ROUNDING);

    let (container_rect, _) =
        ui.allocate_exact_size(Vec2::new(available_width, height), Sense::hover());
    let painter = ui.painter();
    painter.rect(
        container_rect,
        rounding,
        theme.background,
        Stroke::new(1.0, theme.border()),
    );

    let seg_w = container_rect.width() / count as f32;
    let mut changed = false;

    for (i, variant) in T::iter().enumerate() {
        let seg_min = container_rect.min + Vec2::new(i as f32 * seg_w, 0.0);
        let seg_rect = Rect::from_min_size(seg_min, Vec2::new(seg_w, container_rect.height()));
        let is_selected = *current == variant;

        // Vertical separator line
        if i > 0 {
            let x = seg_rect.min.x;
            painter.line_segment(
                [pos2(x, seg_rect.min.y + 4.0), pos2(x, seg_rect.max.y - 4.0)],
                Stroke::new(1.0, theme.border().gamma_multiply(0.6)),
            );
        }

        let id = ui.id().with("segmented_panel").with(name.to_string()).with(i as i64);
        let response = ui
            .interact(seg_rect, id, Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);

        if is_selected {
            painter.rect(
                seg_rect.shrink2(Vec2::new(2.0, 2.0)),
                Rounding::same(4.0),
                theme.primary.gamma_multiply(0.25),
                Stroke::NONE,
            );
        } else if response.hovered() {
            painter.rect(
                seg_rect.shrink2(Vec2::new(2.0, 2.0)),
                Rounding::same(4.0),
                theme.text.gamma_multiply(0.05),
                Stroke::NONE,
            );
        }

        let text_color = if is_selected { theme.primary } else { theme.weak_text() };
        painter.text(
            seg_rect.center(),
            Align2::CENTER_CENTER,
            variant.segment_label(),
            FontId::proportional(11.0),
            text_color,
        );

        if response.clicked() && *current != variant {
            *current = variant;
            changed = true;
        }
    }

    changed
}
