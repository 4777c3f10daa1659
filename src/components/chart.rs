//! Chart Components
//!
//! Revenue line chart and sales-pipeline doughnut, drawn on HTML5 Canvas.
//! Each chart owns one dashboard region: an absent series renders an
//! unavailable message without affecting the sibling chart.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::{GlobalState, PipelineSeries, RevenueSeries};

/// Chart colors for pipeline stages
const STAGE_COLORS: [&str; 5] = [
    "#4e73df", // Blue
    "#1cc88a", // Green
    "#36b9cc", // Cyan
    "#f6c23e", // Yellow
    "#e74a3b", // Red
];

const PANEL_BG: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "#374151"; // gray-700
const LABEL_COLOR: &str = "#9ca3af"; // gray-400
const MUTED_COLOR: &str = "#6b7280"; // gray-500
const REVENUE_COLOR: &str = "#4e73df";

/// Revenue line chart component
#[component]
pub fn RevenueChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let revenue = state.revenue;

    // Redraw whenever the region changes, including into the absent state
    create_effect(move |_| {
        let series = revenue.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_revenue_chart(&canvas, series.as_ref());
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="600"
            height="300"
            class="w-full h-64 rounded-lg"
        />
    }
}

/// Sales pipeline doughnut chart component
#[component]
pub fn PipelineChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let pipeline = state.pipeline;

    create_effect(move |_| {
        let series = pipeline.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_pipeline_chart(&canvas, series.as_ref());
        }
    });

    view! {
        <div>
            <canvas
                node_ref=canvas_ref
                width="600"
                height="300"
                class="w-full h-64 rounded-lg"
            />

            // Stage legend
            <div class="flex justify-center flex-wrap gap-4 mt-4">
                {move || {
                    pipeline.get()
                        .map(|series| series.stages)
                        .unwrap_or_default()
                        .into_iter()
                        .enumerate()
                        .map(|(idx, stage)| {
                            let color = STAGE_COLORS[idx % STAGE_COLORS.len()];
                            view! {
                                <div class="flex items-center space-x-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", color)
                                    />
                                    <span class="text-sm text-gray-300">{stage}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn clear_with_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64, message: &str) {
    ctx.set_fill_style(&PANEL_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);
    ctx.set_fill_style(&MUTED_COLOR.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text(message, width / 2.0 - 80.0, height / 2.0);
}

/// Draw the revenue series as a line chart
fn draw_revenue_chart(canvas: &HtmlCanvasElement, series: Option<&RevenueSeries>) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let series = match series {
        Some(series) if !series.data.is_empty() => series,
        Some(_) => {
            clear_with_message(&ctx, width, height, "No revenue data");
            return;
        }
        None => {
            clear_with_message(&ctx, width, height, "Revenue data unavailable");
            return;
        }
    };

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&PANEL_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Y range from zero to the padded maximum
    let mut max = series.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        max = 1.0;
    }
    max *= 1.1;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * max;
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("${:.0}", value), 5.0, y + 4.0);
    }

    let step = if series.data.len() > 1 {
        chart_width / (series.data.len() - 1) as f64
    } else {
        chart_width
    };

    // Revenue line
    ctx.set_stroke_style(&REVENUE_COLOR.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();

    for (i, value) in series.data.iter().enumerate() {
        let x = margin_left + i as f64 * step;
        let y = margin_top + ((max - value) / max) * chart_height;
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Points
    ctx.set_fill_style(&REVENUE_COLOR.into());
    for (i, value) in series.data.iter().enumerate() {
        let x = margin_left + i as f64 * step;
        let y = margin_top + ((max - value) / max) * chart_height;
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // X-axis labels, thinned so they stay readable
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");

    let every = (series.labels.len() / 6).max(1);
    for (i, label) in series.labels.iter().enumerate() {
        if i % every != 0 {
            continue;
        }
        let x = margin_left + i as f64 * step;
        let _ = ctx.fill_text(label, x - 15.0, height - 10.0);
    }
}

/// Draw the pipeline stages as a doughnut chart
fn draw_pipeline_chart(canvas: &HtmlCanvasElement, series: Option<&PipelineSeries>) {
    let ctx = match context_2d(canvas) {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let series = match series {
        Some(series) => series,
        None => {
            clear_with_message(&ctx, width, height, "Pipeline data unavailable");
            return;
        }
    };

    let total: f64 = series.values.iter().sum();
    if series.values.is_empty() || total <= 0.0 {
        clear_with_message(&ctx, width, height, "No pipeline data");
        return;
    }

    ctx.set_fill_style(&PANEL_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 15.0;

    // Wedges, clockwise from the top
    let mut start = -std::f64::consts::FRAC_PI_2;
    for (idx, value) in series.values.iter().enumerate() {
        let sweep = value / total * std::f64::consts::PI * 2.0;
        let end = start + sweep;

        ctx.set_fill_style(&STAGE_COLORS[idx % STAGE_COLORS.len()].into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        start = end;
    }

    // Punch the hole that makes it a doughnut
    ctx.set_fill_style(&PANEL_BG.into());
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius * 0.6, 0.0, std::f64::consts::PI * 2.0);
    ctx.fill();
}
