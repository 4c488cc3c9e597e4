use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "out/dashboard/index.html";
pub const DEFAULT_PAGE_TITLE: &str = "WOW Sensitivity Analysis";
pub const DEFAULT_PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub output_path: PathBuf,
    pub page_title: String,
    pub plotly_src: String,
    pub dataset_file: Option<PathBuf>,
    pub write_manifest: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            plotly_src: DEFAULT_PLOTLY_SRC.to_string(),
            dataset_file: None,
            write_manifest: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or empty keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Self {
            output_path: get("OUTPUT_PATH").map(PathBuf::from).unwrap_or(defaults.output_path),
            page_title: get("PAGE_TITLE").unwrap_or(defaults.page_title),
            plotly_src: get("PLOTLY_SRC").unwrap_or(defaults.plotly_src),
            dataset_file: get("DATASET_FILE").map(PathBuf::from),
            write_manifest: get("WRITE_MANIFEST")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.write_manifest),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup(&[]));
        assert_eq!(cfg, Config::default());
        assert!(cfg.dataset_file.is_none());
        assert!(cfg.write_manifest);
    }

    #[test]
    fn test_overrides() {
        let cfg = Config::from_lookup(lookup(&[
            ("OUTPUT_PATH", "site/index.html"),
            ("PAGE_TITLE", "Coles"),
            ("DATASET_FILE", "data/sections.json"),
            ("WRITE_MANIFEST", "false"),
        ]));
        assert_eq!(cfg.output_path, PathBuf::from("site/index.html"));
        assert_eq!(cfg.page_title, "Coles");
        assert_eq!(cfg.dataset_file, Some(PathBuf::from("data/sections.json")));
        assert!(!cfg.write_manifest);
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let cfg = Config::from_lookup(lookup(&[("PAGE_TITLE", "  "), ("DATASET_FILE", "")]));
        assert_eq!(cfg.page_title, DEFAULT_PAGE_TITLE);
        assert!(cfg.dataset_file.is_none());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("OFF"));
    }
}
