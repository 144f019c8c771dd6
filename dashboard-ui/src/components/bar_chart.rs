//! Hourly Bar Chart Component
//!
//! Transactions per four-hour slot drawn on canvas, with a y axis, a dashed
//! grid and a hover tooltip.

use bridge_analytics::report::Bar;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::area_chart::js_dash;
use crate::state::use_dashboard_state;

/// Bar colour (indigo-500)
const BAR_COLOR: &str = "#6366F1";
const BAR_HOVER_COLOR: &str = "#4F46E5";

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Share of each slot filled by its bar
const BAR_FILL: f64 = 0.7;

#[component]
pub fn HourlyBarChart() -> impl IntoView {
    let state = use_dashboard_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let hovered = create_rw_signal::<Option<usize>>(None);

    create_effect(move |_| {
        let hover = hovered.get();
        if let Some(canvas) = canvas_ref.get() {
            state
                .snapshot
                .with(|s| draw_bars(&canvas, &s.bars, hover));
        }
    });

    let on_move = move |ev: ev::MouseEvent| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let css_width = canvas.client_width() as f64;
        if css_width <= 0.0 {
            return;
        }

        let x = ev.offset_x() as f64 / css_width * canvas.width() as f64;
        let plot_width = canvas.width() as f64 - MARGIN_LEFT - MARGIN_RIGHT;
        let count = state.snapshot.with(|s| s.bars.len());

        hovered.set(slot_index((x - MARGIN_LEFT) / plot_width, count));
    };

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="320"
                class="w-full h-80 rounded-lg"
                on:mousemove=on_move
                on:mouseleave=move |_| hovered.set(None)
            />

            {move || {
                let bars = state.snapshot.with(|s| s.bars.clone());
                hovered
                    .get()
                    .and_then(|idx| bars.get(idx).cloned())
                    .map(|bar| view! {
                        <div class="absolute top-2 right-2 bg-white dark:bg-gray-900 p-3 border rounded-lg shadow-lg">
                            <p class="font-bold">{bar.label}</p>
                            <p style=format!("color: {}", BAR_COLOR)>
                                {format!("Transactions: {}", bar.value)}
                            </p>
                        </div>
                    })
            }}
        </div>
    }
}

/// Slot under a horizontal position in `0.0..1.0`
pub fn slot_index(fraction: f64, count: usize) -> Option<usize> {
    if count == 0 || !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
        return None;
    }
    Some(((fraction * count as f64) as usize).min(count - 1))
}

/// Top of the y axis: the peak plus 10%, rounded up to a multiple of 4 so
/// every grid line lands on a whole number
fn axis_max(bars: &[Bar]) -> u32 {
    let peak = bars.iter().map(|b| b.value).max().unwrap_or(0);
    if peak == 0 {
        return 4;
    }
    let padded = peak + peak.div_ceil(10);
    padded.div_ceil(4) * 4
}

fn draw_bars(canvas: &HtmlCanvasElement, bars: &[Bar], hovered: Option<usize>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let chart_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let chart_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let baseline = MARGIN_TOP + chart_height;

    ctx.clear_rect(0.0, 0.0, width, height);

    if bars.is_empty() {
        return;
    }

    let y_max = axis_max(bars) as f64;

    // Dashed grid with y-axis labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    let _ = ctx.set_line_dash(&js_dash(&[3.0, 3.0]));
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");

    for i in 0..=4 {
        let y = MARGIN_TOP + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * y_max;
        let _ = ctx.fill_text(&format!("{}", value as u32), 5.0, y + 4.0);
    }
    let _ = ctx.set_line_dash(&js_dash(&[]));

    // Y axis
    ctx.set_stroke_style(&"#9ca3af".into());
    ctx.begin_path();
    ctx.move_to(MARGIN_LEFT, MARGIN_TOP);
    ctx.line_to(MARGIN_LEFT, baseline);
    ctx.stroke();

    let slot = chart_width / bars.len() as f64;
    let bar_width = slot * BAR_FILL;

    for (i, bar) in bars.iter().enumerate() {
        let x = MARGIN_LEFT + i as f64 * slot + (slot - bar_width) / 2.0;
        let bar_height = bar.value as f64 / y_max * chart_height;

        let color = if hovered == Some(i) {
            BAR_HOVER_COLOR
        } else {
            BAR_COLOR
        };
        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, baseline - bar_height, bar_width, bar_height);

        // Hour label
        ctx.set_fill_style(&"#9ca3af".into());
        let _ = ctx.fill_text(&bar.label, x + bar_width / 2.0 - 16.0, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(value: u32) -> Bar {
        Bar {
            label: "00:00".to_string(),
            value,
            height_percent: 0.0,
        }
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(slot_index(0.0, 6), Some(0));
        assert_eq!(slot_index(0.5, 6), Some(3));
        assert_eq!(slot_index(0.99, 6), Some(5));
        assert_eq!(slot_index(1.0, 6), None);
        assert_eq!(slot_index(-0.1, 6), None);
        assert_eq!(slot_index(0.5, 0), None);
    }

    #[test]
    fn test_axis_max_has_headroom() {
        assert_eq!(axis_max(&[bar(800), bar(1200)]), 1320);
        assert_eq!(axis_max(&[bar(9)]), 12);
        assert_eq!(axis_max(&[bar(0)]), 4);
        assert_eq!(axis_max(&[]), 4);
    }
}
