//! Day cell rendering for the month view.
//!
//! Renders one cell: day number, up to two event bars shaped by the
//! continuation classification, the overflow indicator, and tooltips.

use chrono::{Datelike, NaiveDate, Weekday};
use egui::{Align2, Color32, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::format_event_tooltip;
use super::palette::{event_fill, CalendarCellPalette};
use crate::models::event::Event;
use crate::services::assignment::DayEvents;
use crate::services::continuation::{Segment, SegmentShape};
use crate::services::grid::DayCell;

const CELL_HEIGHT: f32 = 88.0;
const BAR_HEIGHT: f32 = 16.0;
const BAR_SPACING: f32 = 18.0;
const BAR_ROUNDING: f32 = 5.0;
/// Inset of a bar edge that does not continue into the adjacent cell.
const BAR_END_INSET: f32 = 3.0;

/// Truncate text to fit within a given pixel width, using binary search
/// and appending "…" when truncation is needed.
fn truncate_single_line_to_width(
    ui: &egui::Ui,
    text: &str,
    font_id: &FontId,
    color: Color32,
    max_width: f32,
) -> String {
    if max_width <= 0.0 {
        return String::new();
    }

    let measure_width = |candidate: &str| {
        let layout_job = egui::text::LayoutJob::simple(
            candidate.to_string(),
            font_id.clone(),
            color,
            f32::INFINITY,
        );
        ui.fonts(|f| f.layout_job(layout_job).size().x)
    };

    if measure_width(text) <= max_width {
        return text.to_string();
    }

    let ellipsis = "…";
    if measure_width(ellipsis) > max_width {
        return String::new();
    }

    let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
    char_boundaries.push(text.len());

    let mut low = 0usize;
    let mut high = char_boundaries.len().saturating_sub(1);

    while low < high {
        let mid = (low + high).div_ceil(2);
        let prefix = &text[..char_boundaries[mid]];
        let candidate = format!("{}{}", prefix, ellipsis);

        if measure_width(&candidate) <= max_width {
            low = mid;
        } else {
            high = mid.saturating_sub(1);
        }
    }

    if low == 0 {
        ellipsis.to_string()
    } else {
        format!("{}{}", &text[..char_boundaries[low]], ellipsis)
    }
}

/// Per-corner rounding for an event bar segment. Edges that continue into
/// the neighboring cell stay square so the bars read as one stitched span.
fn segment_rounding(shape: SegmentShape) -> Rounding {
    match shape {
        SegmentShape::Full => Rounding::same(BAR_ROUNDING),
        SegmentShape::Left => Rounding {
            nw: BAR_ROUNDING,
            sw: BAR_ROUNDING,
            ne: 0.0,
            se: 0.0,
        },
        SegmentShape::Right => Rounding {
            ne: BAR_ROUNDING,
            se: BAR_ROUNDING,
            nw: 0.0,
            sw: 0.0,
        },
        SegmentShape::Middle => Rounding::ZERO,
    }
}

/// Render one day cell. Returns true when the user clicked the cell to
/// create an event (clicks landing on an event bar do not count).
pub(super) fn render_day_cell(
    ui: &mut egui::Ui,
    cell: &DayCell,
    today: NaiveDate,
    first_day_of_week: u8,
    day_events: &DayEvents<'_>,
    palette: CalendarCellPalette,
    col_width: f32,
) -> bool {
    let desired_size = Vec2::new(col_width, CELL_HEIGHT);
    let (rect, response) =
        ui.allocate_exact_size(desired_size, Sense::click().union(Sense::hover()));

    let is_today = cell.date == today;
    let is_weekend = matches!(cell.date.weekday(), Weekday::Sat | Weekday::Sun);

    // Background
    let bg_color = if is_today {
        palette.today_bg
    } else if !cell.in_current_month {
        palette.outside_bg
    } else if is_weekend {
        palette.weekend_bg
    } else {
        palette.regular_bg
    };
    ui.painter().rect_filled(rect, 2.0, bg_color);

    // Border
    let border_color = if is_today {
        palette.today_border
    } else {
        palette.border
    };
    ui.painter()
        .rect_stroke(rect, 2.0, Stroke::new(1.0, border_color));

    // Hover emphasis with cursor change
    if response.hovered() {
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    // Day number; padding days use the muted color
    let text_color = if cell.in_current_month {
        palette.text
    } else {
        palette.muted_text
    };
    ui.painter().text(
        Pos2::new(rect.left() + 5.0, rect.top() + 5.0),
        Align2::LEFT_TOP,
        cell.date.day().to_string(),
        FontId::proportional(14.0),
        text_color,
    );

    let pointer_pos = ui.input(|i| i.pointer.hover_pos());
    let mut hovered_event: Option<&Event> = None;
    let mut y_offset = 24.0;

    for &event in &day_events.visible {
        let segment = Segment::classify(event, cell.date, first_day_of_week);

        // Continuing edges bleed to the cell border so adjacent segments
        // line up; terminal edges keep a small inset.
        let left = if segment.is_start {
            rect.left() + BAR_END_INSET
        } else {
            rect.left()
        };
        let right = if segment.is_end {
            rect.right() - BAR_END_INSET
        } else {
            rect.right()
        };
        let bar_rect = Rect::from_min_max(
            Pos2::new(left, rect.top() + y_offset),
            Pos2::new(right, rect.top() + y_offset + BAR_HEIGHT),
        );

        ui.painter()
            .rect_filled(bar_rect, segment_rounding(segment.shape()), event_fill(&event.color));

        // The title shows on the start day and at each week wrap; other
        // cells draw the bare bar at the same height so rows stay uniform.
        if segment.shows_label {
            let font_id = FontId::proportional(11.0);
            let label = truncate_single_line_to_width(
                ui,
                &event.title,
                &font_id,
                Color32::WHITE,
                bar_rect.width() - 8.0,
            );
            ui.painter().text(
                Pos2::new(bar_rect.left() + 4.0, bar_rect.center().y),
                Align2::LEFT_CENTER,
                label,
                font_id,
                Color32::WHITE,
            );
        }

        if pointer_pos.is_some_and(|pos| bar_rect.contains(pos)) {
            hovered_event = Some(event);
        }
        y_offset += BAR_SPACING;
    }

    // Tooltip for the hovered event bar
    if let Some(event) = hovered_event {
        if response.hovered() {
            let tooltip = format_event_tooltip(event);
            response.clone().on_hover_ui_at_pointer(|ui| {
                ui.label(tooltip);
            });
        }
    } else if response.hovered() {
        response
            .clone()
            .on_hover_text("Click to add an event on this day");
    }

    // Count-of-remaining indicator with the hidden events in a tooltip
    if let Some(more_text) = day_events.overflow_label() {
        let more_pos = Pos2::new(rect.left() + 5.0, rect.top() + y_offset);
        ui.painter().text(
            more_pos,
            Align2::LEFT_TOP,
            &more_text,
            FontId::proportional(10.0),
            palette.muted_text,
        );

        let more_rect = Rect::from_min_size(more_pos, Vec2::new(rect.width() - 10.0, 13.0));
        if pointer_pos.is_some_and(|pos| more_rect.contains(pos)) {
            response.clone().on_hover_ui_at_pointer(|ui| {
                ui.label(egui::RichText::new("Hidden events:").strong());
                for event in &day_events.hidden {
                    ui.label(format!("• {}", event.title));
                }
            });
        }
    }

    // Clicking an event bar is inert (events cannot be edited); any other
    // click in the cell asks for the add-event dialog.
    response.clicked() && hovered_event.is_none()
}
