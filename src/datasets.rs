//! Fixed scenario datasets and JSON dataset loading.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::logging::{debug, info, obj, v_num, v_str, Domain};
use crate::scenario::{DatasetSection, ScenarioRecord};

const SUBTITLE: &str = "Methodology Comparison";

const GREEN: &str = "#10b981";
const CYAN: &str = "#06b6d4";
const BLUE: &str = "#3b82f6";
const AMBER: &str = "#f59e0b";
const VIOLET: &str = "#8b5cf6";

/// Both class-action sensitivity sections, in display order.
pub fn builtin_sections() -> Vec<DatasetSection> {
    vec![woolworths_section(), coles_section()]
}

pub fn woolworths_section() -> DatasetSection {
    DatasetSection::new(
        "Woolworths Class Action : whole class sensitivity analysis",
        SUBTITLE,
        vec![
            ScenarioRecord::new(
                "28.11 Judgement\nmethodology - Without\nFWO - Pay Period",
                1668147026.75,
                GREEN,
            )
            .with_features([
                "Clause 28.11: Judgement Based Approach",
                "FWO Cut Status: Without FWO",
                "Set-off: Pay Period",
                "Best on Judgement",
            ]),
            ScenarioRecord::new(
                "28.11 Judgement\nmethodology - Without\nFWO - Bi Annual",
                1371946816.29,
                CYAN,
            )
            .with_features([
                "Clause 28.11: Judgement Based Approach",
                "FWO Cut Status: Without FWO",
                "Set-off: Bi Annual",
                "Second Best on Judgement",
            ]),
            ScenarioRecord::new(
                "28.11 Coles\nmethodology - Without\nFWO - Bi Annual",
                409657215.48,
                BLUE,
            )
            .with_features([
                "Clause 28.11: Coles Based Approach",
                "FWO Cut Status: Without FWO",
                "Set-off: Bi Annual",
                "Realistic Worst",
            ]),
            ScenarioRecord::new(
                "28.11 Judgement\nmethodology - With\nFWO - Pay Period",
                326116709.40,
                AMBER,
            )
            .with_features([
                "Clause 28.11: Judgement Based Approach",
                "FWO Cut Status: With FWO Applied",
                "Set-off: Pay Period",
                "Likely Best",
            ]),
            ScenarioRecord::new(
                "28.11 Coles\nmethodology - With\nFWO - Bi Annual",
                56690258.85,
                VIOLET,
            )
            .with_features([
                "Clause 28.11: Coles Based Approach",
                "FWO Status: With FWO Applied",
                "Set-off: Bi Annual",
                "Bare Minimum",
            ]),
        ],
    )
}

pub fn coles_section() -> DatasetSection {
    DatasetSection::new(
        "Coles' Class Action : whole class sensitivity analysis",
        SUBTITLE,
        vec![
            ScenarioRecord::new(
                "28.11 Judgement - Pay period - 557C on all shifts",
                780652186.32,
                GREEN,
            )
            .with_features([
                "Clause 28.11: Judgement Based Approach",
                "Set-off: Pay period",
                "557C condition on all shifts",
                "Highest estimate",
            ]),
            ScenarioRecord::new(
                "28.11 Judgement - Pay period - 557C on selected shifts",
                690773333.38,
                CYAN,
            )
            .with_features([
                "Clause 28.11: Judgement Based Approach",
                "Set-off: Pay period",
                "557C condition on non-clocked shifts",
                "Best on Judgement",
            ]),
            ScenarioRecord::new(
                "28.11 Judgement - Pay period - 557C non-clocked - After FWO",
                282887638.08,
                BLUE,
            )
            .with_features([
                "Clause 28.11: Judgement Based Approach",
                "Set-off: Pay period",
                "557C condition on non-clocked shifts",
                "Likely Best",
            ]),
            ScenarioRecord::new(
                "28.11 Coles - Annual - 557C all shifts - After FWO",
                37575310.68,
                AMBER,
            )
            .with_features([
                "Clause 28.11: Coles Based Approach",
                "Set-off: Annual",
                "557C condition on all shifts",
            ]),
            ScenarioRecord::new(
                "28.11 Coles - Annual - 557C non-clocked - After FWO",
                26617692.75,
                VIOLET,
            )
            .with_features([
                "Clause 28.11: Coles Based Approach",
                "Set-off: Annual",
                "557C condition on non-clocked shifts",
                "Likely Worst",
            ]),
        ],
    )
}

/// Read a JSON array of sections. An empty array is rejected since there is nothing to draw.
pub fn load_sections(path: &Path) -> Result<Vec<DatasetSection>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading dataset file {}", path.display()))?;
    let sections: Vec<DatasetSection> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing dataset file {}", path.display()))?;
    if sections.is_empty() {
        bail!("dataset file {} contains no sections", path.display());
    }

    for section in &sections {
        debug(
            Domain::Data,
            "section_loaded",
            obj(&[
                ("header_title", v_str(&section.header_title)),
                ("records", v_num(section.records.len() as f64)),
            ]),
        );
    }
    info(
        Domain::Data,
        "dataset_file_loaded",
        obj(&[
            ("path", v_str(&path.to_string_lossy())),
            ("sections", v_num(sections.len() as f64)),
        ]),
    );
    Ok(sections)
}

/// Sections from `path` when given, otherwise the built-in datasets.
pub fn resolve_sections(path: Option<&Path>) -> Result<Vec<DatasetSection>> {
    match path {
        Some(p) => load_sections(p),
        None => {
            let sections = builtin_sections();
            info(
                Domain::Data,
                "builtin_datasets",
                obj(&[("sections", v_num(sections.len() as f64))]),
            );
            Ok(sections)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let sections = builtin_sections();
        assert_eq!(sections.len(), 2);
        for section in &sections {
            assert_eq!(section.records.len(), 5);
            assert_eq!(section.header_subtitle, SUBTITLE);
            assert!(section.records.iter().all(|r| r.amount >= 0.0));
        }
        assert_eq!(sections[0].max_amount(), 1668147026.75);
        assert_eq!(sections[1].records[3].features.len(), 3);
    }

    #[test]
    fn test_builtin_colors_distinct_within_section() {
        for section in builtin_sections() {
            let mut colors: Vec<&str> = section.records.iter().map(|r| r.accent_color.as_str()).collect();
            colors.sort();
            colors.dedup();
            assert_eq!(colors.len(), section.records.len());
        }
    }

    #[test]
    fn test_resolve_defaults_to_builtin() {
        let sections = resolve_sections(None).unwrap();
        assert_eq!(sections, builtin_sections());
    }
}
