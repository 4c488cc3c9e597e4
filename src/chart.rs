//! Declarative bar-chart specification.
//!
//! The structs serialize to the Plotly figure schema (`{"data": [...], "layout": {...}}`)
//! so the page can hand them straight to `Plotly.newPlot`.

use serde::Serialize;

use crate::format::format_abbreviated;
use crate::render::escape_html;
use crate::scenario::{max_amount, ScenarioRecord};

pub const BAR_WIDTH: f64 = 0.42;
pub const ANNOTATION_YSHIFT: i32 = 22;
pub const Y_HEADROOM: f64 = 1.18;
pub const CHART_HEIGHT: u32 = 520;

const HOVER_TEMPLATE: &str = "<b>%{customdata}</b><br>Total: %{y:,.2f} AUD<extra></extra>";
const TRANSPARENT: &str = "rgba(0,0,0,0)";
const TICK_COLOR: &str = "rgba(226,232,240,0.92)";
const ANNOTATION_BG: &str = "rgba(255,255,255,0.95)";
const ANNOTATION_BORDER: &str = "rgba(255,255,255,0.65)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub data: Vec<BarTrace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<usize>,
    pub y: Vec<f64>,
    pub marker: Marker,
    pub width: f64,
    pub hovertemplate: &'static str,
    pub customdata: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: usize,
    pub y: f64,
    pub yshift: i32,
    pub text: String,
    pub showarrow: bool,
    pub align: &'static str,
    pub font: Font,
    pub bgcolor: &'static str,
    pub bordercolor: &'static str,
    pub borderwidth: u32,
    pub borderpad: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    pub showgrid: bool,
    pub zeroline: bool,
    pub tickmode: &'static str,
    pub tickvals: Vec<usize>,
    pub ticktext: Vec<String>,
    pub tickfont: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub range: [f64; 2],
    pub showgrid: bool,
    pub zeroline: bool,
    pub ticks: &'static str,
    pub showticklabels: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub margin: Margin,
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub showlegend: bool,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    pub annotations: Vec<Annotation>,
}

impl ChartSpec {
    pub fn bars(&self) -> &BarTrace {
        &self.data[0]
    }

    pub fn y_range(&self) -> [f64; 2] {
        self.layout.yaxis.range
    }
}

/// Build the bar chart for `records`, one bar per record in input order.
pub fn bar_chart(records: &[ScenarioRecord]) -> ChartSpec {
    let slots: Vec<usize> = (0..records.len()).collect();
    let max = max_amount(records);

    let trace = BarTrace {
        kind: "bar",
        x: slots.clone(),
        y: records.iter().map(|r| r.amount).collect(),
        marker: Marker {
            color: records.iter().map(|r| r.accent_color.clone()).collect(),
        },
        width: BAR_WIDTH,
        hovertemplate: HOVER_TEMPLATE,
        customdata: records.iter().map(|r| hover_title(r.title())).collect(),
    };

    let annotations = records
        .iter()
        .enumerate()
        .map(|(i, r)| value_annotation(i, r))
        .collect();

    let layout = Layout {
        height: CHART_HEIGHT,
        margin: Margin { l: 40, r: 40, t: 20, b: 85 },
        paper_bgcolor: TRANSPARENT,
        plot_bgcolor: TRANSPARENT,
        showlegend: false,
        xaxis: XAxis {
            showgrid: false,
            zeroline: false,
            tickmode: "array",
            tickvals: slots,
            ticktext: records.iter().map(|r| tick_text(&r.label)).collect(),
            tickfont: Font {
                size: 11,
                color: TICK_COLOR.to_string(),
            },
        },
        yaxis: YAxis {
            range: y_range(max),
            showgrid: false,
            zeroline: false,
            ticks: "",
            showticklabels: false,
        },
        annotations,
    };

    ChartSpec {
        data: vec![trace],
        layout,
    }
}

/// `[0, max * 1.18]`, or `[0, 1]` when there is nothing to scale against.
pub fn y_range(max: f64) -> [f64; 2] {
    if max > 0.0 {
        [0.0, max * Y_HEADROOM]
    } else {
        [0.0, 1.0]
    }
}

fn value_annotation(slot: usize, record: &ScenarioRecord) -> Annotation {
    let color = &record.accent_color;
    Annotation {
        x: slot,
        y: record.amount,
        yshift: ANNOTATION_YSHIFT,
        text: format!(
            "<b><span style='color:{}'>{}</span></b>",
            escape_html(color),
            format_abbreviated(record.amount)
        ),
        showarrow: false,
        align: "center",
        font: Font {
            size: 12,
            color: color.clone(),
        },
        bgcolor: ANNOTATION_BG,
        bordercolor: ANNOTATION_BORDER,
        borderwidth: 1,
        borderpad: 6,
    }
}

fn hover_title(title: &str) -> String {
    escape_html(&title.replace('\n', " "))
}

fn tick_text(label: &str) -> String {
    escape_html(label).replace('\n', "<br>")
}
