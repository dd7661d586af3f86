//! Plain SVG/CSS charts used by the dashboard.

use leptos::*;

const PLOT_WIDTH: f64 = 320.0;
const PLOT_HEIGHT: f64 = 120.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// One column made of stacked segments, each `(value, css class)`.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedColumn {
    pub label: String,
    pub segments: Vec<(u32, &'static str)>,
}

impl StackedColumn {
    pub fn total(&self) -> u32 {
        self.segments.iter().map(|(value, _)| value).sum()
    }
}

/// `value` as a share of `max`, clamped to `0..=100`. Zero when `max` is not positive.
pub fn percent_of(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// SVG polyline points spread evenly across the plot, highest value at the top.
pub fn line_points(values: &[f64], width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = step * idx as f64;
            let y = height - percent_of(*value, max) / 100.0 * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[component]
pub fn ChartCard(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h3 class="text-base font-semibold text-fg">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
pub fn StackedColumnChart(#[prop(into)] columns: Signal<Vec<StackedColumn>>) -> impl IntoView {
    let tallest = move || {
        columns
            .get()
            .iter()
            .map(StackedColumn::total)
            .max()
            .unwrap_or(0) as f64
    };
    view! {
        <div class="flex items-end gap-3 h-40">
            {move || {
                let max = tallest();
                columns
                    .get()
                    .into_iter()
                    .map(|column| {
                        let segments = column
                            .segments
                            .iter()
                            .map(|(value, class)| {
                                let height = percent_of(*value as f64, max);
                                view! {
                                    <div
                                        class=format!("w-full {}", class)
                                        style=format!("height: {:.1}%", height)
                                        title=value.to_string()
                                    ></div>
                                }
                            })
                            .collect_view();
                        view! {
                            <div class="flex-1 flex flex-col items-center h-full">
                                <div class="flex-1 w-full flex flex-col-reverse">{segments}</div>
                                <span class="mt-1 text-xs text-fg-muted">{column.label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn LineChart(#[prop(into)] data: Signal<Vec<Datum>>) -> impl IntoView {
    let points = move || {
        let values: Vec<f64> = data.get().iter().map(|d| d.value).collect();
        line_points(&values, PLOT_WIDTH, PLOT_HEIGHT)
    };
    view! {
        <div class="space-y-1">
            <svg
                class="w-full h-32 text-action-primary-bg"
                viewBox=format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT)
                preserveAspectRatio="none"
            >
                <polyline fill="none" stroke="currentColor" stroke-width="2" points=points />
            </svg>
            <div class="flex justify-between text-xs text-fg-muted">
                {move || data.get().into_iter().map(|d| view! {
                    <span title=d.value.to_string()>{d.label}</span>
                }).collect_view()}
            </div>
        </div>
    }
}

/// Horizontal bars. Each value is drawn relative to `max` and labelled with `suffix`.
#[component]
pub fn HorizontalBarChart(
    #[prop(into)] data: Signal<Vec<Datum>>,
    max: f64,
    #[prop(optional, into)] suffix: String,
    #[prop(optional, into)] bar_class: Option<String>,
) -> impl IntoView {
    let bar_class = bar_class.unwrap_or_else(|| "bg-action-primary-bg".to_string());
    view! {
        <div class="space-y-3">
            {move || {
                let suffix = suffix.clone();
                let bar_class = bar_class.clone();
                data.get()
                    .into_iter()
                    .map(|d| {
                        let width = percent_of(d.value, max);
                        view! {
                            <div>
                                <div class="flex justify-between text-sm">
                                    <span class="text-fg">{d.label}</span>
                                    <span class="text-fg-muted">{format!("{}{}", d.value, suffix)}</span>
                                </div>
                                <div class="mt-1 h-2 w-full rounded-full bg-surface-muted">
                                    <div
                                        class=format!("h-2 rounded-full {}", bar_class)
                                        style=format!("width: {:.1}%", width)
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
