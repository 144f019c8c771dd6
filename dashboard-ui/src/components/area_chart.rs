//! Area Chart Component
//!
//! Filtered flow history drawn on an HTML5 Canvas, with a hover tooltip.

use bridge_analytics::report::{format_millions, tooltip_line, AreaPoint};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::use_dashboard_state;

/// Series colour (indigo-500)
const SERIES_COLOR: &str = "#6366F1";

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

/// Activity chart component
#[component]
pub fn AreaChart() -> impl IntoView {
    let state = use_dashboard_state();
    let canvas_ref = create_node_ref::<html::Canvas>();
    let hovered = create_rw_signal::<Option<usize>>(None);

    // Redraw when the filtered view or metric changes
    create_effect(move |_| {
        let snapshot = state.snapshot.get();
        let hover = hovered.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &snapshot.area, hover);
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

        // Pointer position in canvas pixels
        let x = ev.offset_x() as f64 / css_width * canvas.width() as f64;
        let plot_width = canvas.width() as f64 - MARGIN_LEFT - MARGIN_RIGHT;
        let fraction = (x - MARGIN_LEFT) / plot_width;
        let count = state.snapshot.with(|s| s.area.len());

        hovered.set(nearest_index(fraction, count));
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

            // Tooltip
            {move || {
                let snapshot = state.snapshot.get();
                hovered
                    .get()
                    .and_then(|idx| snapshot.area.get(idx).cloned())
                    .map(|point| view! {
                        <div class="absolute top-2 right-2 bg-white dark:bg-gray-900 p-4 border rounded-lg shadow-lg">
                            <p class="font-bold">{point.label.clone()}</p>
                            <p style=format!("color: {}", SERIES_COLOR)>
                                {tooltip_line(snapshot.metric, point.value)}
                            </p>
                        </div>
                    })
            }}

            // Legend
            <div class="flex justify-center items-center space-x-2 mt-2">
                <div
                    class="w-3 h-3 rounded-full"
                    style=format!("background-color: {}", SERIES_COLOR)
                />
                <span class="text-sm text-gray-500">
                    {move || state.metric.get().to_string()}
                </span>
            </div>
        </div>
    }
}

/// Index of the point closest to a horizontal position in `0.0..=1.0`
///
/// Points are spaced evenly across the plot, like a category axis.
pub fn nearest_index(fraction: f64, count: usize) -> Option<usize> {
    if count == 0 || !fraction.is_finite() || !(-0.05..=1.05).contains(&fraction) {
        return None;
    }
    if count == 1 {
        return Some(0);
    }

    let step = (count - 1) as f64;
    let idx = (fraction.clamp(0.0, 1.0) * step).round() as usize;
    Some(idx.min(count - 1))
}

/// Horizontal position of point `idx` out of `count`, as a fraction of the plot
fn point_fraction(idx: usize, count: usize) -> f64 {
    if count <= 1 {
        0.5
    } else {
        idx as f64 / (count - 1) as f64
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, points: &[AreaPoint], hovered: Option<usize>) {
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

    if points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data for selected range", width / 2.0 - 90.0, height / 2.0);
        return;
    }

    // Area charts start at zero
    let max = points.iter().map(|p| p.value).fold(0.0, f64::max);
    let y_max = if max > 0.0 { max * 1.1 } else { 1.0 };

    let x_at = |idx: usize| MARGIN_LEFT + point_fraction(idx, points.len()) * chart_width;
    let y_at = |value: f64| MARGIN_TOP + (1.0 - value / y_max) * chart_height;

    // Dashed grid with y-axis labels
    ctx.set_stroke_style(&"#e5e7eb".into());
    ctx.set_line_width(1.0);
    let dash = js_dash(&[3.0, 3.0]);
    let _ = ctx.set_line_dash(&dash);

    for i in 0..=4 {
        let y = MARGIN_TOP + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * y_max;
        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format_millions(value, 1), 5.0, y + 4.0);
    }
    let _ = ctx.set_line_dash(&js_dash(&[]));

    // Gradient fill under the line
    let gradient = ctx.create_linear_gradient(0.0, MARGIN_TOP, 0.0, baseline);
    let _ = gradient.add_color_stop(0.05, "rgba(99, 102, 241, 0.8)");
    let _ = gradient.add_color_stop(0.95, "rgba(99, 102, 241, 0.0)");

    ctx.begin_path();
    ctx.move_to(x_at(0), baseline);
    for (i, point) in points.iter().enumerate() {
        ctx.line_to(x_at(i), y_at(point.value));
    }
    ctx.line_to(x_at(points.len() - 1), baseline);
    ctx.close_path();
    let fill: &JsValue = gradient.as_ref();
    ctx.set_fill_style(fill);
    ctx.fill();

    // Series line
    ctx.set_stroke_style(&SERIES_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            ctx.move_to(x_at(i), y_at(point.value));
        } else {
            ctx.line_to(x_at(i), y_at(point.value));
        }
    }
    ctx.stroke();

    // Points, enlarged under the pointer
    ctx.set_fill_style(&SERIES_COLOR.into());
    for (i, point) in points.iter().enumerate() {
        let radius = if hovered == Some(i) { 5.0 } else { 3.0 };
        ctx.begin_path();
        let _ = ctx.arc(
            x_at(i),
            y_at(point.value),
            radius,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    // X-axis date labels
    ctx.set_fill_style(&"#9ca3af".into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(&point.label, x_at(i) - 32.0, height - 10.0);
    }
}

/// Line dash pattern for `set_line_dash`
pub(crate) fn js_dash(segments: &[f64]) -> JsValue {
    segments
        .iter()
        .map(|s| JsValue::from_f64(*s))
        .collect::<js_sys::Array>()
        .into()
}
