use serde::{Deserialize, Serialize};

pub const DEFAULT_PANEL_TITLE: &str = "Comparative Analysis";

/// One settlement estimate variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Chart tick text; may span several lines.
    pub label: String,
    /// Card title and hover text. Falls back to `label`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_title: Option<String>,
    pub amount: f64,
    pub accent_color: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl ScenarioRecord {
    pub fn new(label: impl Into<String>, amount: f64, accent_color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            display_title: None,
            amount,
            accent_color: accent_color.into(),
            features: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.display_title = Some(title.into());
        self
    }

    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }

    pub fn title(&self) -> &str {
        self.display_title.as_deref().unwrap_or(&self.label)
    }
}

/// A named, ordered group of scenarios rendered as one chart and card row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSection {
    pub header_title: String,
    pub header_subtitle: String,
    #[serde(default = "default_panel_title")]
    pub panel_title: String,
    #[serde(default)]
    pub footnotes: Vec<String>,
    pub records: Vec<ScenarioRecord>,
}

fn default_panel_title() -> String {
    DEFAULT_PANEL_TITLE.to_string()
}

impl DatasetSection {
    pub fn new(
        header_title: impl Into<String>,
        header_subtitle: impl Into<String>,
        records: Vec<ScenarioRecord>,
    ) -> Self {
        Self {
            header_title: header_title.into(),
            header_subtitle: header_subtitle.into(),
            panel_title: default_panel_title(),
            footnotes: Vec::new(),
            records,
        }
    }

    pub fn with_footnotes<I, S>(mut self, footnotes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.footnotes = footnotes.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_amount(&self) -> f64 {
        max_amount(&self.records)
    }

    pub fn total_amount(&self) -> f64 {
        self.records.iter().map(|r| r.amount).sum()
    }
}

/// Largest amount in the slice, 0 when empty.
pub fn max_amount(records: &[ScenarioRecord]) -> f64 {
    records.iter().map(|r| r.amount).fold(0.0, f64::max)
}
