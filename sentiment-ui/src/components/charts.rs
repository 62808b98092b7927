//! Chart Components
//!
//! Score pie and history bar charts drawn on HTML5 Canvas.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::palette::{shares, slice_label, SERIES_COLORS, SERIES_NAMES};
use crate::state::{HistoryEntry, Scores, SessionState};

const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID: &str = "#374151"; // gray-700
const LABEL: &str = "#9ca3af"; // gray-400

/// Pie chart of the current score distribution
#[component]
pub fn ScoreChart(scores: Scores) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &scores);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="400" height="300" class="w-full rounded-lg" />
    }
}

/// Grouped bar chart across every analysis in the session
#[component]
pub fn HistoryChart() -> impl IntoView {
    let state = use_context::<SessionState>().expect("SessionState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let history = state.history.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_history(&canvas, &history);
        }
    });

    view! {
        <canvas node_ref=canvas_ref width="400" height="300" class="w-full rounded-lg" />
        <Legend />
    }
}

#[component]
fn Legend() -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-3">
            {SERIES_NAMES
                .iter()
                .zip(SERIES_COLORS)
                .map(|(name, color)| view! {
                    <div class="flex items-center space-x-2">
                        <div
                            class="w-3 h-3 rounded-full"
                            style=format!("background-color: {}", color)
                        />
                        <span class="text-sm text-gray-300">{*name}</span>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_pie(canvas: &HtmlCanvasElement, scores: &Scores) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 40.0;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let fractions = shares(scores.values());
    if fractions.iter().all(|f| *f == 0.0) {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No scores", cx - 35.0, cy);
        return;
    }

    // Start at twelve o'clock, clockwise
    let mut start = -PI / 2.0;
    ctx.set_font("12px sans-serif");
    for ((name, color), share) in SERIES_NAMES.iter().zip(SERIES_COLORS).zip(fractions) {
        if share == 0.0 {
            continue;
        }
        let end = start + share * 2.0 * PI;

        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        let mid = (start + end) / 2.0;
        let lx = cx + mid.cos() * (radius + 18.0);
        let ly = cy + mid.sin() * (radius + 18.0);
        let label = slice_label(name, share);
        ctx.set_fill_style(&LABEL.into());
        let offset = if mid.cos() < 0.0 { label.len() as f64 * 6.5 } else { 0.0 };
        let _ = ctx.fill_text(&label, lx - offset, ly + 4.0);

        start = end;
    }
}

fn draw_history(canvas: &HtmlCanvasElement, history: &[HistoryEntry]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    let margin_left = 50.0;
    let margin_right = 10.0;
    let margin_top = 15.0;
    let margin_bottom = 45.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    // Scores live in [0, 1]
    ctx.set_stroke_style(&GRID.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&LABEL.into());
        let value = 1.0 - i as f64 / 4.0;
        let _ = ctx.fill_text(&format!("{:.2}", value), 10.0, y + 4.0);
    }

    // Axis titles
    ctx.set_fill_style(&LABEL.into());
    let _ = ctx.fill_text("Entry #", margin_left + chart_width / 2.0 - 20.0, height - 5.0);
    ctx.save();
    let _ = ctx.translate(12.0, margin_top + chart_height / 2.0 + 15.0);
    let _ = ctx.rotate(-PI / 2.0);
    let _ = ctx.fill_text("Score", 0.0, 0.0);
    ctx.restore();

    if history.is_empty() {
        return;
    }

    let group_width = chart_width / history.len() as f64;
    let bar_width = (group_width * 0.8) / 3.0;

    for (idx, entry) in history.iter().enumerate() {
        let group_x = margin_left + idx as f64 * group_width + group_width * 0.1;

        for (series, (value, color)) in entry
            .result
            .scores
            .values()
            .into_iter()
            .zip(SERIES_COLORS)
            .enumerate()
        {
            let bar_height = value.clamp(0.0, 1.0) * chart_height;
            ctx.set_fill_style(&color.into());
            ctx.fill_rect(
                group_x + series as f64 * bar_width,
                margin_top + chart_height - bar_height,
                bar_width,
                bar_height,
            );
        }

        ctx.set_fill_style(&LABEL.into());
        let _ = ctx.fill_text(
            &entry.id.to_string(),
            group_x + bar_width * 1.5 - 4.0,
            margin_top + chart_height + 16.0,
        );
    }
}
