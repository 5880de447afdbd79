//! Chart.js configuration for the analyzer dashboards.
//!
//! Builders return plain JSON for `new Chart(ctx, config)`. Tooltip label
//! callbacks cannot travel as JSON, so the label texts they would produce
//! are exposed as functions ([`radar_label`], [`share_label`],
//! [`niche_label`]) for the host to wire up.

use crate::dom::DomAdapter;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const CHART_FONT: &str = "Tajawal";
pub const CHART_FONT_STACK: &str = "Tajawal, Cairo, sans-serif";
pub const CHART_CONFIG_ATTR: &str = "data-chart-config";

const LABEL_COLOR: &str = "#374151";
const TICK_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const TRACK_COLOR: &str = "#e5e7eb";

const DEFAULT_DISTRIBUTION: [f64; 4] = [25.0, 35.0, 30.0, 10.0];
const DEFAULT_BEST_HOURS: [u32; 3] = [20, 21, 22];
const DEFAULT_NICHES: [&str; 4] = ["تعليم وتطوير", "تقنية وبرمجة", "ترفيه وكوميديا", "أخرى"];
const DEFAULT_NICHE_VALUES: [f64; 4] = [40.0, 25.0, 20.0, 15.0];

/// Global defaults: Arabic fonts and right-to-left legends and tooltips.
pub fn rtl_defaults() -> Value {
    json!({
        "font": { "family": CHART_FONT_STACK },
        "plugins": {
            "legend": { "rtl": true, "textDirection": "rtl" },
            "tooltip": {
                "rtl": true,
                "textDirection": "rtl",
                "position": "average",
                "caretPadding": 2
            }
        }
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceScores {
    pub channel_art: f64,
    pub thumbnails: f64,
    pub titles: f64,
}

/// Title scores; `attractiveness` is on a 0–100 scale, the rest on 0–10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleScores {
    pub attractiveness: f64,
    pub emotional: f64,
    pub keyword: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NicheData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

fn font(size: Option<u32>) -> Value {
    match size {
        Some(size) => json!({ "family": CHART_FONT, "size": size }),
        None => json!({ "family": CHART_FONT }),
    }
}

fn tooltip_fonts() -> Value {
    json!({ "titleFont": font(None), "bodyFont": font(None) })
}

fn radar_dataset(label: &str, data: [f64; 4], rgb: &str) -> Value {
    json!({
        "label": label,
        "data": data,
        "backgroundColor": format!("rgba({rgb}, 0.2)"),
        "borderColor": format!("rgba({rgb}, 1)"),
        "borderWidth": 2,
        "pointBackgroundColor": format!("rgba({rgb}, 1)"),
        "pointBorderColor": "#fff",
        "pointBorderWidth": 2,
        "pointHoverBackgroundColor": "#fff",
        "pointHoverBorderColor": format!("rgba({rgb}, 1)"),
        "pointRadius": 6,
        "pointHoverRadius": 8
    })
}

/// Shared options for the 0–10 radar charts.
fn radar_options() -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": false,
        "scales": {
            "r": {
                "angleLines": { "display": true, "color": GRID_COLOR },
                "grid": { "color": GRID_COLOR },
                "pointLabels": { "font": font(Some(12)), "color": LABEL_COLOR },
                "ticks": {
                    "display": true,
                    "stepSize": 2,
                    "min": 0,
                    "max": 10,
                    "backdropColor": "transparent",
                    "color": TICK_COLOR,
                    "font": font(Some(10))
                },
                "suggestedMin": 0,
                "suggestedMax": 10
            }
        },
        "plugins": {
            "legend": { "display": false },
            "tooltip": tooltip_fonts()
        },
        "elements": { "line": { "tension": 0.2 } }
    })
}

pub fn performance_chart(scores: &PerformanceScores) -> Value {
    let overall = (scores.channel_art + scores.thumbnails + scores.titles) / 3.0;
    json!({
        "type": "radar",
        "data": {
            "labels": ["صورة القناة", "الصور المصغرة", "تحسين العناوين", "استراتيجية المحتوى"],
            "datasets": [radar_dataset(
                "درجة الأداء",
                [scores.channel_art, scores.thumbnails, scores.titles, overall],
                "37, 99, 235",
            )]
        },
        "options": radar_options()
    })
}

pub fn title_analysis_chart(scores: &TitleScores) -> Value {
    let attractiveness = scores.attractiveness / 10.0;
    let overall = (attractiveness + scores.emotional + scores.keyword) / 3.0;
    json!({
        "type": "radar",
        "data": {
            "labels": ["الجاذبية", "التأثير العاطفي", "قوة الكلمات", "الشمولية"],
            "datasets": [radar_dataset(
                "درجة التحليل",
                [attractiveness, scores.emotional, scores.keyword, overall],
                "59, 130, 246",
            )]
        },
        "options": radar_options()
    })
}

/// Doughnut of excellent/good/average/poor shares.
pub fn score_distribution_chart(distribution: Option<&[f64]>) -> Value {
    let data = distribution.unwrap_or(&DEFAULT_DISTRIBUTION);
    json!({
        "type": "doughnut",
        "data": {
            "labels": ["ممتاز (8-10)", "جيد (6-8)", "متوسط (4-6)", "ضعيف (0-4)"],
            "datasets": [{
                "data": data,
                "backgroundColor": ["#10b981", "#3b82f6", "#f59e0b", "#ef4444"],
                "borderWidth": 2,
                "borderColor": "#ffffff",
                "hoverBorderWidth": 3,
                "hoverOffset": 8
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "cutout": "60%",
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "rtl": true,
                    "labels": {
                        "font": font(Some(12)),
                        "color": LABEL_COLOR,
                        "padding": 15,
                        "usePointStyle": true,
                        "pointStyle": "circle"
                    }
                },
                "tooltip": tooltip_fonts()
            }
        }
    })
}

/// Gauge for a 0–1 success probability. The centre text is passed as
/// options of a `centerText` plugin the host registers.
pub fn success_probability_chart(probability: f64) -> Value {
    let percentage = (probability * 100.0).round();
    let color = success_color(probability);
    json!({
        "type": "doughnut",
        "data": {
            "datasets": [{
                "data": [percentage, 100.0 - percentage],
                "backgroundColor": [color, TRACK_COLOR],
                "borderWidth": 0,
                "cutout": "75%"
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
                "tooltip": { "enabled": false },
                "centerText": {
                    "text": format!("{}%", percentage as i64),
                    "color": color,
                    "font": format!("bold 28px {CHART_FONT}")
                }
            }
        }
    })
}

/// Expected engagement for a publishing hour; evening hours weigh 1.5×.
pub fn expected_engagement(hour: u32) -> f64 {
    let hour_factor: f64 = if (19..=23).contains(&hour) { 1.5 } else { 1.0 };
    (100.0 * hour_factor).round()
}

pub fn timing_chart(best_hours: Option<&[u32]>) -> Value {
    let hours = best_hours.unwrap_or(&DEFAULT_BEST_HOURS);
    let labels: Vec<String> = hours.iter().map(|h| format!("{h}:00")).collect();
    let engagement: Vec<f64> = hours.iter().map(|&h| expected_engagement(h)).collect();
    let axis_ticks = json!({ "font": font(None), "color": LABEL_COLOR });
    json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "مستوى التفاعل المتوقع",
                "data": engagement,
                "borderColor": "rgba(16, 185, 129, 1)",
                "backgroundColor": "rgba(16, 185, 129, 0.1)",
                "borderWidth": 3,
                "fill": true,
                "tension": 0.4,
                "pointBackgroundColor": "rgba(16, 185, 129, 1)",
                "pointBorderColor": "#fff",
                "pointBorderWidth": 2,
                "pointRadius": 6,
                "pointHoverRadius": 8
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "x": { "grid": { "color": GRID_COLOR }, "ticks": axis_ticks.clone() },
                "y": {
                    "grid": { "color": GRID_COLOR },
                    "ticks": axis_ticks,
                    "title": {
                        "display": true,
                        "text": "مستوى التفاعل",
                        "font": font(Some(12)),
                        "color": LABEL_COLOR
                    }
                }
            },
            "plugins": {
                "legend": { "labels": { "font": font(None), "color": LABEL_COLOR } },
                "tooltip": tooltip_fonts()
            }
        }
    })
}

pub fn niche_chart(niches: Option<&NicheData>) -> Value {
    let (labels, values): (Vec<String>, Vec<f64>) = match niches {
        Some(niches) => (niches.labels.clone(), niches.data.clone()),
        None => (
            DEFAULT_NICHES.iter().map(|n| n.to_string()).collect(),
            DEFAULT_NICHE_VALUES.to_vec(),
        ),
    };
    let palette = [
        "59, 130, 246",
        "16, 185, 129",
        "245, 158, 11",
        "239, 68, 68",
        "139, 92, 246",
    ];
    let fills: Vec<String> = palette.iter().map(|rgb| format!("rgba({rgb}, 0.8)")).collect();
    let borders: Vec<String> = palette.iter().map(|rgb| format!("rgba({rgb}, 1)")).collect();
    json!({
        "type": "polarArea",
        "data": {
            "labels": labels,
            "datasets": [{
                "data": values,
                "backgroundColor": fills,
                "borderColor": borders,
                "borderWidth": 2
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "scales": {
                "r": {
                    "pointLabels": { "font": font(Some(11)), "color": LABEL_COLOR },
                    "ticks": { "display": false },
                    "grid": { "color": GRID_COLOR }
                }
            },
            "plugins": {
                "legend": {
                    "position": "bottom",
                    "labels": {
                        "font": font(Some(12)),
                        "color": LABEL_COLOR,
                        "padding": 15,
                        "usePointStyle": true
                    }
                },
                "tooltip": tooltip_fonts()
            }
        }
    })
}

/// Green, blue, amber or red by probability band.
pub fn success_color(probability: f64) -> &'static str {
    if probability >= 0.8 {
        "#10b981"
    } else if probability >= 0.6 {
        "#3b82f6"
    } else if probability >= 0.4 {
        "#f59e0b"
    } else {
        "#ef4444"
    }
}

/// Radar tooltip text, e.g. `7.5/10`.
pub fn radar_label(value: f64) -> String {
    format!("{value:.1}/10")
}

/// Doughnut tooltip text: the label and its share of the total.
pub fn share_label(label: &str, value: f64, total: f64) -> String {
    format!("{label}: {:.1}%", value / total * 100.0)
}

pub fn niche_label(label: &str, value: f64) -> String {
    format!("{label}: {value}%")
}

/// `parseFloat`-style read of a data attribute: the longest numeric prefix,
/// or 0 when there is none.
fn numeric_attr<D: DomAdapter>(dom: &D, node: &D::Node, name: &str) -> f64 {
    let Some(raw) = dom.attribute(node, name) else {
        return 0.0;
    };
    let raw = raw.trim_start();
    (1..=raw.len())
        .rev()
        .filter(|&end| raw.is_char_boundary(end))
        .find_map(|end| raw[..end].parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Builds the configs for the dashboard canvases present in the page and
/// stores each one in the canvas's `data-chart-config` attribute.
///
/// Returns the number of canvases configured.
pub fn attach_chart_configs<D: DomAdapter>(dom: &D) -> usize {
    let mut attached = 0;

    if let Some(canvas) = dom.element_by_id("performanceChart") {
        let scores = PerformanceScores {
            channel_art: numeric_attr(dom, &canvas, "data-channel-art"),
            thumbnails: numeric_attr(dom, &canvas, "data-thumbnails"),
            titles: numeric_attr(dom, &canvas, "data-titles"),
        };
        dom.set_attribute(&canvas, CHART_CONFIG_ATTR, &performance_chart(&scores).to_string());
        attached += 1;
    }

    if let Some(canvas) = dom.element_by_id("scoreDistributionChart") {
        dom.set_attribute(&canvas, CHART_CONFIG_ATTR, &score_distribution_chart(None).to_string());
        attached += 1;
    }

    if let Some(canvas) = dom.element_by_id("titleAnalysisChart") {
        let scores = TitleScores {
            attractiveness: numeric_attr(dom, &canvas, "data-attractiveness"),
            emotional: numeric_attr(dom, &canvas, "data-emotional"),
            keyword: numeric_attr(dom, &canvas, "data-keyword"),
        };
        dom.set_attribute(&canvas, CHART_CONFIG_ATTR, &title_analysis_chart(&scores).to_string());
        attached += 1;
    }

    tracing::debug!("attached {} chart configs", attached);
    attached
}
