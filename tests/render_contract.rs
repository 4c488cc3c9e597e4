//! Contract tests for section rendering: ordering, colour consistency, axis scaling.

use scenario_dashboard::chart::Y_HEADROOM;
use scenario_dashboard::datasets::builtin_sections;
use scenario_dashboard::format::{format_abbreviated, format_currency};
use scenario_dashboard::render::{render_section, RenderedSection};
use scenario_dashboard::scenario::{DatasetSection, ScenarioRecord, DEFAULT_PANEL_TITLE};

fn three_records() -> Vec<ScenarioRecord> {
    vec![
        ScenarioRecord::new("Judgement\nPay Period", 780652186.32, "#10b981")
            .with_features(["Set-off: Pay period", "Highest estimate"]),
        ScenarioRecord::new("Judgement\nSelected", 690773333.38, "#06b6d4")
            .with_features(["Best on Judgement"]),
        ScenarioRecord::new("Coles\nAnnual", 26617692.75, "#8b5cf6"),
    ]
}

fn render(records: &[ScenarioRecord]) -> RenderedSection {
    render_section(records, "Header", "Sub", DEFAULT_PANEL_TITLE, &[])
}

fn permutations(items: &[ScenarioRecord]) -> Vec<Vec<ScenarioRecord>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            out.push(tail);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Formatting reference values
// ---------------------------------------------------------------------------
#[test]
fn formatter_reference_values() {
    assert_eq!(format_currency(0.0), "A$0.00");
    assert_eq!(format_currency(1668147026.75), "A$1,668,147,026.75");
    assert_eq!(format_abbreviated(1_000_000_000.0), "$1.00B");
    assert_eq!(format_abbreviated(999_999_999.0), "$1000.00M");
    assert_eq!(format_abbreviated(56690258.85), "$56.69M");
    assert_eq!(format_abbreviated(1668147026.75), "$1.67B");
}

// ---------------------------------------------------------------------------
// Axis scaling and bar heights
// ---------------------------------------------------------------------------
#[test]
fn y_axis_is_headroom_over_max_and_bars_match_amounts() {
    let records = three_records();
    let out = render(&records);
    assert_eq!(out.chart.y_range(), [0.0, 780652186.32 * Y_HEADROOM]);
    let heights = &out.chart.bars().y;
    for (h, r) in heights.iter().zip(&records) {
        assert_eq!(*h, r.amount);
    }
}

#[test]
fn empty_records_render_degenerate_axis_and_no_cards() {
    let out = render(&[]);
    assert_eq!(out.chart.y_range(), [0.0, 1.0]);
    assert!(out.cards.is_empty());
    assert!(out.chart.bars().y.is_empty());
    assert!(out.cards_html().contains("card-row"));
}

// ---------------------------------------------------------------------------
// Ordering: cards and bars follow records index-for-index
// ---------------------------------------------------------------------------
#[test]
fn card_and_bar_order_match_records_for_all_permutations() {
    for perm in permutations(&three_records()) {
        let out = render(&perm);
        assert_eq!(out.cards.len(), perm.len());
        assert_eq!(out.chart.bars().x, (0..perm.len()).collect::<Vec<_>>());
        for (i, r) in perm.iter().enumerate() {
            assert_eq!(out.cards[i].title, r.title());
            assert_eq!(out.chart.bars().y[i], r.amount);
            assert_eq!(out.chart.layout.annotations[i].x, i);
            assert_eq!(out.chart.layout.xaxis.ticktext[i], r.label.replace('\n', "<br>"));
        }
    }
}

// ---------------------------------------------------------------------------
// Accent colour: bar, annotation and card agree per record
// ---------------------------------------------------------------------------
#[test]
fn accent_color_is_consistent_per_record() {
    let records = three_records();
    let out = render(&records);
    for (i, r) in records.iter().enumerate() {
        assert_eq!(out.chart.bars().marker.color[i], r.accent_color);
        assert_eq!(out.chart.layout.annotations[i].font.color, r.accent_color);
        assert_eq!(out.cards[i].accent_color, r.accent_color);
        let html = out.cards[i].to_html();
        assert!(html.contains(&format!("border: 2px solid {};", r.accent_color)));
        for other in records.iter().filter(|o| o.accent_color != r.accent_color) {
            assert!(!html.contains(&other.accent_color));
        }
    }
}

// ---------------------------------------------------------------------------
// Purity
// ---------------------------------------------------------------------------
#[test]
fn rendering_twice_is_identical() {
    for section in builtin_sections() {
        assert_eq!(section.render(), section.render());
    }
}

// ---------------------------------------------------------------------------
// Footnotes and header text
// ---------------------------------------------------------------------------
#[test]
fn footnotes_render_in_order_and_text_is_escaped() {
    let section = DatasetSection::new(
        "Coles' Class Action",
        "Methodology <Comparison>",
        three_records(),
    )
    .with_footnotes(["Estimates exclude interest.", "Figures in AUD."]);
    let out = section.render();
    assert_eq!(out.footnotes.len(), 2);
    let notes = out.footnotes_html();
    assert!(notes.find("exclude interest").unwrap() < notes.find("Figures in AUD").unwrap());
    let header = out.header_html();
    assert!(header.contains("Coles&#39; Class Action"));
    assert!(header.contains("Methodology &lt;Comparison&gt;"));
}

#[test]
fn builtin_first_section_card_totals() {
    let sections = builtin_sections();
    let out = sections[0].render();
    assert_eq!(out.cards[0].total, "A$1,668,147,026.75");
    assert_eq!(out.cards[4].total, "A$56,690,258.85");
    assert!(out.chart.layout.annotations[0].text.contains("$1.67B"));
    assert!(out.chart.layout.annotations[4].text.contains("$56.69M"));
    assert_eq!(out.panel_title, DEFAULT_PANEL_TITLE);
}
