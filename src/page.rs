//! Self-contained HTML page hosting the rendered sections.

use std::fmt::Write;

use anyhow::{Context, Result};

use crate::render::{escape_html, RenderedSection};

/// Assemble one HTML document. Each section gets its own chart div and `Plotly.newPlot` call.
pub fn render_page(title: &str, plotly_src: &str, sections: &[RenderedSection]) -> Result<String> {
    let mut body = String::new();
    for (index, section) in sections.iter().enumerate() {
        body.push_str(&section_html(index, section)?);
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <script src="{plotly_src}"></script>
  <style>{css}</style>
</head>
<body>
<main class="page">
{body}</main>
</body>
</html>
"#,
        title = escape_html(title),
        plotly_src = escape_html(plotly_src),
        css = STYLESHEET,
        body = body,
    ))
}

pub fn chart_dom_id(index: usize) -> String {
    format!("chart-{}", index)
}

fn section_html(index: usize, section: &RenderedSection) -> Result<String> {
    let chart_id = chart_dom_id(index);
    let data = script_json(&section.chart.data)
        .with_context(|| format!("serializing chart data for section {}", index))?;
    let layout = script_json(&section.chart.layout)
        .with_context(|| format!("serializing chart layout for section {}", index))?;

    let mut out = String::from("<section class=\"section\">\n");
    out.push_str(&section.header_html());
    out.push_str(&section.footnotes_html());
    out.push_str("<div class=\"panel\">\n");
    let _ = writeln!(
        out,
        r#"<div class="panel-title">{}</div>"#,
        escape_html(&section.panel_title)
    );
    let _ = writeln!(out, r#"<div id="{}" class="chart"></div>"#, chart_id);
    let _ = writeln!(
        out,
        r#"<script>Plotly.newPlot("{}", {}, {}, {{"responsive": true, "displayModeBar": false}});</script>"#,
        chart_id, data, layout
    );
    out.push_str(&section.cards_html());
    out.push_str("</div>\n</section>\n");
    Ok(out)
}

/// JSON safe to inline in a `<script>` element.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

const STYLESHEET: &str = r#"
body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
  background: radial-gradient(1200px 700px at 20% 0%, rgba(59,130,246,0.20), rgba(0,0,0,0) 55%),
              radial-gradient(900px 600px at 100% 10%, rgba(16,185,129,0.18), rgba(0,0,0,0) 55%),
              linear-gradient(135deg, #0b1220 0%, #0f172a 45%, #0b1220 100%);
  background-attachment: fixed;
  color: #e5e7eb;
}
.page { max-width: 1400px; margin: 0 auto; padding: 2rem 1.5rem 2.5rem; }
.section { margin-bottom: 3rem; }
.hdr-wrap { text-align: center; margin-bottom: 1.5rem; }
.hdr-row { display: inline-flex; align-items: center; gap: 14px; }
.hdr-icon {
  width: 44px; height: 44px; border-radius: 12px;
  background: rgba(59,130,246,0.12);
  border: 1px solid rgba(59,130,246,0.30);
  display: grid; place-items: center;
}
.hdr-title { font-size: 2.05rem; font-weight: 800; color: #ffffff; line-height: 1.15; }
.hdr-sub { color: rgba(226,232,240,0.80); font-size: 1.05rem; margin-top: 0.35rem; }
.notes { color: rgba(226,232,240,0.75); font-size: 0.85rem; margin: 0 0 1rem 0; }
.panel {
  background: linear-gradient(135deg, rgba(30,41,59,0.60), rgba(2,6,23,0.55));
  border: 1px solid rgba(148,163,184,0.20);
  border-radius: 18px;
  padding: 22px 22px 18px 22px;
}
.panel-title { font-size: 1.35rem; font-weight: 750; color: #ffffff; margin: 0 0 1rem 0; }
.chart { width: 100%; }
.card-row { display: grid; gap: 1rem; margin-top: 1rem; }
.card {
  background: rgba(255,255,255,0.97);
  border-radius: 14px;
  padding: 14px 14px 12px 14px;
}
.card-hdr {
  display: flex; align-items: flex-start; gap: 10px;
  padding-bottom: 10px; margin-bottom: 10px;
  border-bottom: 1px solid rgba(15,23,42,0.12);
}
.swatch { width: 11px; height: 11px; border-radius: 3px; margin-top: 4px; flex-shrink: 0; }
.card-title { font-weight: 800; color: #0f172a; font-size: 0.80rem; line-height: 1.2; }
.card-li { display: flex; gap: 8px; align-items: flex-start; margin-bottom: 8px; }
.dot { font-size: 0.85rem; line-height: 1; margin-top: 1px; }
.li-text { font-size: 0.76rem; color: rgba(15,23,42,0.75); line-height: 1.25; }
.card-ft { border-top: 1px solid rgba(15,23,42,0.12); margin-top: 10px; padding-top: 10px; }
.ft-lbl { font-size: 0.72rem; font-weight: 750; color: rgba(15,23,42,0.55); }
.ft-val { font-size: 1.05rem; font-weight: 900; margin-top: 2px; }
"#;
