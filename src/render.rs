//! Section rendering: one chart plus one card per scenario.

use std::fmt::Write;

use crate::chart::{bar_chart, ChartSpec};
use crate::format::format_currency;
use crate::scenario::{DatasetSection, ScenarioRecord};

pub const TOTAL_LABEL: &str = "Total Amount";

/// Descriptive card for a single scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub accent_color: String,
    pub title: String,
    pub features: Vec<String>,
    pub total_label: &'static str,
    pub total: String,
}

/// Everything needed to draw one dataset section.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub header_title: String,
    pub header_subtitle: String,
    pub panel_title: String,
    pub footnotes: Vec<String>,
    pub chart: ChartSpec,
    pub cards: Vec<Card>,
}

pub fn render_section(
    records: &[ScenarioRecord],
    header_title: &str,
    header_subtitle: &str,
    panel_title: &str,
    footnotes: &[String],
) -> RenderedSection {
    RenderedSection {
        header_title: header_title.to_string(),
        header_subtitle: header_subtitle.to_string(),
        panel_title: panel_title.to_string(),
        footnotes: footnotes.to_vec(),
        chart: bar_chart(records),
        cards: records.iter().map(Card::from_record).collect(),
    }
}

impl DatasetSection {
    pub fn render(&self) -> RenderedSection {
        render_section(
            &self.records,
            &self.header_title,
            &self.header_subtitle,
            &self.panel_title,
            &self.footnotes,
        )
    }
}

impl Card {
    pub fn from_record(record: &ScenarioRecord) -> Self {
        Self {
            accent_color: record.accent_color.clone(),
            title: record.title().to_string(),
            features: record.features.clone(),
            total_label: TOTAL_LABEL,
            total: format_currency(record.amount),
        }
    }

    pub fn to_html(&self) -> String {
        let color = escape_html(&self.accent_color);
        let mut out = String::new();
        let _ = writeln!(out, r#"<div class="card" style="border: 2px solid {color};">"#);
        let _ = writeln!(
            out,
            r#"  <div class="card-hdr" style="border-bottom-color: {color}22;">"#
        );
        let _ = writeln!(out, r#"    <div class="swatch" style="background:{color};"></div>"#);
        let _ = writeln!(
            out,
            r#"    <div class="card-title">{}</div>"#,
            multiline_html(&self.title)
        );
        out.push_str("  </div>\n  <div class=\"card-body\">\n");
        for feature in &self.features {
            let _ = writeln!(
                out,
                r#"    <div class="card-li"><div class="dot" style="color:{color}">&#9679;</div><div class="li-text">{}</div></div>"#,
                escape_html(feature)
            );
        }
        out.push_str("  </div>\n  <div class=\"card-ft\">\n");
        let _ = writeln!(out, r#"    <div class="ft-lbl">{}</div>"#, self.total_label);
        let _ = writeln!(
            out,
            r#"    <div class="ft-val" style="color:{color};">{}</div>"#,
            escape_html(&self.total)
        );
        out.push_str("  </div>\n</div>\n");
        out
    }
}

impl RenderedSection {
    pub fn header_html(&self) -> String {
        format!(
            r#"<div class="hdr-wrap">
  <div class="hdr-row">
    <div class="hdr-icon">{icon}</div>
    <div class="hdr-title">{title}</div>
  </div>
  <div class="hdr-sub">{subtitle}</div>
</div>
"#,
            icon = DOCUMENT_ICON,
            title = escape_html(&self.header_title),
            subtitle = escape_html(&self.header_subtitle),
        )
    }

    /// Bulleted disclaimer lines; empty when there are no footnotes.
    pub fn footnotes_html(&self) -> String {
        if self.footnotes.is_empty() {
            return String::new();
        }
        let mut out = String::from("<ul class=\"notes\">\n");
        for note in &self.footnotes {
            let _ = writeln!(out, "  <li>{}</li>", escape_html(note));
        }
        out.push_str("</ul>\n");
        out
    }

    /// Card row laid out as a single grid row, one column per card.
    pub fn cards_html(&self) -> String {
        let columns = self.cards.len().max(1);
        let mut out = format!(
            "<div class=\"card-row\" style=\"grid-template-columns: repeat({}, minmax(0, 1fr));\">\n",
            columns
        );
        for card in &self.cards {
            out.push_str(&card.to_html());
        }
        out.push_str("</div>\n");
        out
    }
}

const DOCUMENT_ICON: &str = r##"<svg width="22" height="22" viewBox="0 0 24 24" fill="none"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z" stroke="#60a5fa" stroke-width="2"/><path d="M14 2v6h6" stroke="#60a5fa" stroke-width="2"/><path d="M8 13h8M8 17h8" stroke="#60a5fa" stroke-width="2" stroke-linecap="round"/></svg>"##;

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn multiline_html(s: &str) -> String {
    escape_html(s).replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ScenarioRecord {
        ScenarioRecord::new("Coles\nAnnual", 37575310.68, "#f59e0b")
            .with_features(["Set-off: Annual", "557C condition on all shifts"])
    }

    #[test]
    fn test_card_fields() {
        let card = Card::from_record(&record());
        assert_eq!(card.title, "Coles\nAnnual");
        assert_eq!(card.total, "A$37,575,310.68");
        assert_eq!(card.total_label, TOTAL_LABEL);
        assert_eq!(card.accent_color, "#f59e0b");
    }

    #[test]
    fn test_card_html_order_and_breaks() {
        let html = Card::from_record(&record()).to_html();
        assert!(html.contains("Coles<br>Annual"));
        let first = html.find("Set-off: Annual").unwrap();
        let second = html.find("557C condition").unwrap();
        assert!(first < second);
        assert!(html.contains("border: 2px solid #f59e0b;"));
        assert!(html.contains(r#"<div class="ft-val" style="color:#f59e0b;">A$37,575,310.68</div>"#));
    }

    #[test]
    fn test_card_without_features() {
        let html = Card::from_record(&ScenarioRecord::new("x", 1.0, "#000")).to_html();
        assert!(!html.contains("card-li"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>A&B</b>"), "&lt;b&gt;A&amp;B&lt;/b&gt;");
        assert_eq!(escape_html("Coles'"), "Coles&#39;");
    }

    #[test]
    fn test_footnotes_html() {
        let section = render_section(&[], "t", "s", "p", &["one".to_string(), "two".to_string()]);
        let html = section.footnotes_html();
        assert!(html.find("<li>one</li>").unwrap() < html.find("<li>two</li>").unwrap());
        let bare = render_section(&[], "t", "s", "p", &[]);
        assert!(bare.footnotes_html().is_empty());
    }
}
