//! Chart Rendering
//!
//! Builds Chart.js configurations from server aggregates and hands them to
//! the globally loaded `Chart` constructor. The only computation here is
//! percentage formatting for legend labels.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::{js_error, UiError};

/// Line chart stroke (indigo)
pub const REVENUE_BORDER: &str = "rgb(99, 102, 241)";
pub const REVENUE_FILL: &str = "rgba(99, 102, 241, 0.1)";

/// One color per `OrderStatus::ALL` entry
pub const STATUS_COLORS: [&str; 5] = [
    "rgb(245, 158, 11)",
    "rgb(59, 130, 246)",
    "rgb(139, 92, 246)",
    "rgb(34, 197, 94)",
    "rgb(239, 68, 68)",
];

pub const CATEGORY_COLORS: [&str; 6] = [
    "rgb(99, 102, 241)",
    "rgb(34, 197, 94)",
    "rgb(245, 158, 11)",
    "rgb(239, 68, 68)",
    "rgb(139, 92, 246)",
    "rgb(59, 130, 246)",
];

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;
}

/// `value / total * 100` to one decimal; `"0"` when the total is zero
pub fn percentage(value: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.1}", value / total * 100.0)
    } else {
        "0".to_string()
    }
}

/// Integers without a trailing `.0`
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// How doughnut legend entries are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendStyle {
    /// `Electronics (40.0%)`
    Percent,
    /// `Pending: 3 (30.0%)`
    CountAndPercent,
}

pub fn share_labels(labels: &[String], values: &[f64], style: LegendStyle) -> Vec<String> {
    let total: f64 = values.iter().sum();
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = values.get(i).copied().unwrap_or_default();
            let pct = percentage(value, total);
            match style {
                LegendStyle::Percent => format!("{} ({}%)", label, pct),
                LegendStyle::CountAndPercent => format!("{}: {} ({}%)", label, format_value(value), pct),
            }
        })
        .collect()
}

// ========================
// Chart.js config shapes
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub background_color: Paint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

/// One fill for the whole dataset, or one per segment
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerSegment(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub display: bool,
    pub position: &'static str,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabels {
    pub use_point_style: bool,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub x: Axis,
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<Ticks>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticks {
    pub max_rotation: u32,
    pub min_rotation: u32,
}

fn base_options(legend_position: &'static str, scales: Option<Scales>) -> ChartOptions {
    ChartOptions {
        responsive: true,
        maintain_aspect_ratio: false,
        plugins: Plugins {
            legend: Legend {
                display: true,
                position: legend_position,
                labels: LegendLabels {
                    use_point_style: true,
                    padding: 15,
                },
            },
        },
        scales,
    }
}

/// Filled revenue line
pub fn revenue_line(labels: &[String], values: &[f64], label: &str) -> ChartConfig {
    ChartConfig {
        kind: "line",
        data: ChartData {
            labels: labels.to_vec(),
            datasets: vec![Dataset {
                label: Some(label.to_string()),
                data: values.to_vec(),
                border_color: Some(REVENUE_BORDER.to_string()),
                background_color: Paint::Solid(REVENUE_FILL.to_string()),
                fill: Some(true),
                tension: Some(0.4),
                border_width: Some(2),
            }],
        },
        options: base_options(
            "top",
            Some(Scales {
                x: Axis {
                    begin_at_zero: None,
                    ticks: Some(Ticks {
                        max_rotation: 45,
                        min_rotation: 0,
                    }),
                },
                y: Axis {
                    begin_at_zero: Some(true),
                    ticks: None,
                },
            }),
        ),
    }
}

/// Share-of-total doughnut with percentages baked into the legend labels
pub fn share_doughnut(labels: &[String], values: &[f64], colors: &[&str], style: LegendStyle) -> ChartConfig {
    ChartConfig {
        kind: "doughnut",
        data: ChartData {
            labels: share_labels(labels, values, style),
            datasets: vec![Dataset {
                label: None,
                data: values.to_vec(),
                border_color: Some("#fff".to_string()),
                background_color: Paint::PerSegment(colors.iter().map(|c| c.to_string()).collect()),
                fill: None,
                tension: None,
                border_width: Some(2),
            }],
        },
        options: base_options("bottom", None),
    }
}

/// Render into a canvas. Fails when Chart.js is missing or throws.
pub fn render_chart(canvas: &web_sys::HtmlCanvasElement, config: &ChartConfig) -> Result<(), UiError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let js_config = config
        .serialize(&serializer)
        .map_err(|e| UiError::Config(format!("chart config: {}", e)))?;
    ChartJs::new(canvas, &js_config).map_err(|e| UiError::Config(format!("Chart.js: {}", js_error(&e))))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_percentage_guards_zero_total() {
        assert_eq!(percentage(0.0, 0.0), "0");
        assert_eq!(percentage(5.0, 0.0), "0");
        assert_eq!(percentage(1.0, 3.0), "33.3");
        assert_eq!(percentage(2.0, 2.0), "100.0");
    }

    #[test]
    fn test_share_labels() {
        let labels = strings(&["Pending", "Shipped"]);
        assert_eq!(
            share_labels(&labels, &[1.0, 3.0], LegendStyle::CountAndPercent),
            strings(&["Pending: 1 (25.0%)", "Shipped: 3 (75.0%)"])
        );
        assert_eq!(
            share_labels(&labels, &[0.0, 0.0], LegendStyle::Percent),
            strings(&["Pending (0%)", "Shipped (0%)"])
        );
    }

    #[test]
    fn test_share_labels_tolerate_short_data() {
        let labels = strings(&["Books", "Toys"]);
        assert_eq!(share_labels(&labels, &[12.5], LegendStyle::Percent), strings(&["Books (100.0%)", "Toys (0.0%)"]));
    }

    #[test]
    fn test_doughnut_config_shape() {
        let cfg = share_doughnut(&strings(&["A"]), &[1.0], &STATUS_COLORS, LegendStyle::Percent);
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["type"], "doughnut");
        assert_eq!(json["options"]["maintainAspectRatio"], false);
        assert_eq!(json["options"]["plugins"]["legend"]["position"], "bottom");
        assert!(json["options"].get("scales").is_none());
        assert_eq!(json["data"]["datasets"][0]["backgroundColor"][4], "rgb(239, 68, 68)");
    }

    #[test]
    fn test_line_config_shape() {
        let cfg = revenue_line(&strings(&["Mon", "Tue"]), &[10.0, 12.5], "Revenue ($)");
        let json = serde_json::to_value(&cfg).unwrap();
        assert_eq!(json["type"], "line");
        assert_eq!(json["data"]["datasets"][0]["fill"], true);
        assert_eq!(json["data"]["datasets"][0]["backgroundColor"], REVENUE_FILL);
        assert_eq!(json["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(json["options"]["scales"]["x"]["ticks"]["maxRotation"], 45);
    }

    #[test]
    fn test_format_value_large_and_fractional() {
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(1e20), "100000000000000000000");
        assert_eq!(format_value(12.5), "12.5");
    }

}
