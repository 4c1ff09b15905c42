//! SVG charts for the analytics dashboard

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::VisibilityOptions;
use crate::core::dashboard::{DataPoint, scale_series, shares};
use crate::ui::visibility::use_visibility;

const CHART_HEIGHT: f64 = 160.0;
const BAR_WIDTH: f64 = 28.0;
const BAR_GAP: f64 = 16.0;

/// Vertical bars, with an optional paler comparison bar behind each one.
///
/// Bars grow from the baseline the first time the chart scrolls into view.
#[component]
pub fn BarChart(
    points: &'static [DataPoint],
    #[prop(default = "Current")] label: &'static str,
    #[prop(default = "Previous")] previous_label: &'static str,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visibility = use_visibility(node, VisibilityOptions::once().with_threshold(0.3));
    let shown = move || visibility.get().has_been_seen;

    let bars = scale_series(points, CHART_HEIGHT);
    let has_comparison = points.iter().any(|p| p.previous.is_some());
    let width = bars.len() as f64 * (BAR_WIDTH + BAR_GAP) + BAR_GAP;

    view! {
        <div node_ref=node class="w-full">
            <svg
                class="w-full h-48"
                viewBox=format!("0 0 {} {}", width, CHART_HEIGHT + 24.0)
                preserveAspectRatio="none"
                role="img"
                aria-label=label
            >
                {bars.into_iter().enumerate().map(|(i, bar)| {
                    let x = BAR_GAP + i as f64 * (BAR_WIDTH + BAR_GAP);
                    let previous = bar.previous_height.map(|h| view! {
                        <rect
                            x={x - 4.0}
                            y=move || { if shown() { CHART_HEIGHT - h } else { CHART_HEIGHT } }
                            width=BAR_WIDTH
                            height=move || { if shown() { h } else { 0.0 } }
                            rx="4"
                            class="fill-indigo-200 chart-bar"
                        />
                    });
                    view! {
                        <g>
                            {previous}
                            <rect
                                x=x
                                y=move || { if shown() { CHART_HEIGHT - bar.height } else { CHART_HEIGHT } }
                                width=BAR_WIDTH
                                height=move || { if shown() { bar.height } else { 0.0 } }
                                rx="4"
                                class="fill-indigo-600 chart-bar"
                                style:transition-delay=format!("{}ms", i * 80)
                            />
                            <text
                                x={x + BAR_WIDTH / 2.0}
                                y={CHART_HEIGHT + 18.0}
                                text-anchor="middle"
                                class="fill-slate-500 text-[10px]"
                            >
                                {bar.label}
                            </text>
                        </g>
                    }
                }).collect_view()}
            </svg>
            {has_comparison.then(|| view! {
                <div class="flex items-center gap-4 mt-2 text-xs text-slate-500">
                    <span class="flex items-center gap-1">
                        <span class="w-3 h-3 rounded-sm bg-indigo-600"></span>{label}
                    </span>
                    <span class="flex items-center gap-1">
                        <span class="w-3 h-3 rounded-sm bg-indigo-200"></span>{previous_label}
                    </span>
                </div>
            })}
        </div>
    }
}

/// Horizontal percentage bars, one per data point
#[component]
pub fn ShareBars(points: &'static [DataPoint]) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let visibility = use_visibility(node, VisibilityOptions::once().with_threshold(0.3));

    view! {
        <div node_ref=node class="space-y-3">
            {shares(points).into_iter().map(|(label, share)| view! {
                <div>
                    <div class="flex justify-between text-sm mb-1">
                        <span class="text-slate-700">{label}</span>
                        <span class="font-medium text-slate-900">{format!("{:.0}%", share)}</span>
                    </div>
                    <div class="h-2 rounded-full bg-slate-100 overflow-hidden">
                        <div
                            class="h-full rounded-full bg-gradient-to-r from-indigo-600 to-violet-500 chart-bar"
                            style:width=move || {
                                if visibility.get().has_been_seen { format!("{:.1}%", share) } else { "0%".to_string() }
                            }
                        ></div>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}
