//! Fixed 11-slide deck template.
//!
//! The template is declarative: [`build_deck`] turns the unified report into
//! typed slides of positioned elements (text boxes, tables, badge shapes) so
//! the data bindings and the layout constants stay independently testable.
//! The serializer in [`crate::pptx`] never sees report data directly.
//!
//! Geometry is absolute, in EMU on a 16:9 canvas. Text is never measured;
//! overly long content truncates visually, which is an accepted limitation of
//! the fixed template rather than an error.

use chrono::NaiveDate;

use crate::model::{RiskItem, UnifiedReport};
use crate::report::ReportParams;
use crate::status::{self, AggregateStatus};

/// Number of slides in the template.
pub const SLIDE_COUNT: usize = 11;

/// Canvas width in EMU (13.333 in, 16:9).
pub const SLIDE_WIDTH: i64 = 12_192_000;
/// Canvas height in EMU (7.5 in).
pub const SLIDE_HEIGHT: i64 = 6_858_000;

pub const BRAND_DARK: &str = "1F3864";
pub const TEXT_DARK: &str = "1A1A1A";
pub const TEXT_MUTED: &str = "595959";
pub const WHITE: &str = "FFFFFF";

/// Absolute placement on the canvas, in EMU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Rect {
    pub const fn new(x: i64, y: i64, cx: i64, cy: i64) -> Self {
        Self { x, y, cx, cy }
    }
}

/// Run-level text styling. Sizes are in hundredths of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub size: u32,
    pub bold: bool,
    pub color: &'static str,
}

impl TextStyle {
    pub const fn new(size: u32, bold: bool, color: &'static str) -> Self {
        Self { size, bold, color }
    }
}

const COVER_TITLE: TextStyle = TextStyle::new(4000, true, TEXT_DARK);
const COVER_SUBTITLE: TextStyle = TextStyle::new(2000, false, TEXT_MUTED);
const SLIDE_TITLE: TextStyle = TextStyle::new(2800, true, BRAND_DARK);
const BODY: TextStyle = TextStyle::new(1400, false, TEXT_DARK);
const BODY_BOLD: TextStyle = TextStyle::new(1400, true, TEXT_DARK);
const FINE: TextStyle = TextStyle::new(1000, false, TEXT_MUTED);
const CHROME: TextStyle = TextStyle::new(1000, false, WHITE);
const BADGE_LABEL: TextStyle = TextStyle::new(1600, true, WHITE);

/// One paragraph of a text box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub text: String,
    pub style: TextStyle,
    pub bullet: bool,
}

impl TextLine {
    pub fn plain(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            bullet: false,
        }
    }

    pub fn bullet(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
            bullet: true,
        }
    }
}

/// One table cell; `color` overrides the default body text color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub color: Option<&'static str>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    pub fn colored(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

/// A positioned visual element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        frame: Rect,
        lines: Vec<TextLine>,
    },
    Table {
        frame: Rect,
        col_widths: Vec<i64>,
        header: Vec<String>,
        rows: Vec<Vec<Cell>>,
    },
    /// Solid-fill rectangle; badges are rounded and carry a centered label.
    Shape {
        frame: Rect,
        fill: &'static str,
        rounded: bool,
        label: Option<(String, TextStyle)>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub name: &'static str,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub title: String,
    pub slides: Vec<Slide>,
}

// Shared chrome geometry.
const HEADER_BAND: Rect = Rect::new(0, 0, SLIDE_WIDTH, 228_600);
const FOOTER_BAND: Rect = Rect::new(0, 6_583_680, SLIDE_WIDTH, 274_320);
const FOOTER_LABEL: Rect = Rect::new(457_200, 6_583_680, 6_858_000, 274_320);
const PAGE_NUMBER: Rect = Rect::new(10_515_600, 6_583_680, 1_219_200, 274_320);
const TITLE_FRAME: Rect = Rect::new(457_200, 411_480, 11_277_600, 548_640);
const BODY_FRAME: Rect = Rect::new(457_200, 1_143_000, 11_277_600, 5_257_800);

fn text(frame: Rect, lines: Vec<TextLine>) -> Element {
    Element::Text { frame, lines }
}

fn badge(frame: Rect, status: AggregateStatus) -> Element {
    Element::Shape {
        frame,
        fill: status.color_hex(),
        rounded: true,
        label: Some((status.label().to_string(), BADGE_LABEL)),
    }
}

/// Branded band, footer label, and the running "N of 11" page number.
fn chrome(page: usize, params: &ReportParams) -> Vec<Element> {
    vec![
        Element::Shape {
            frame: HEADER_BAND,
            fill: BRAND_DARK,
            rounded: false,
            label: None,
        },
        Element::Shape {
            frame: FOOTER_BAND,
            fill: BRAND_DARK,
            rounded: false,
            label: None,
        },
        text(
            FOOTER_LABEL,
            vec![TextLine::plain(
                format!(
                    "{} {} - Weekly Status",
                    params.customer_name, params.engagement_name
                ),
                CHROME,
            )],
        ),
        text(
            PAGE_NUMBER,
            vec![TextLine::plain(format!("{page} of {SLIDE_COUNT}"), CHROME)],
        ),
    ]
}

fn titled(name: &'static str, page: usize, title: String, params: &ReportParams) -> Slide {
    let mut elements = chrome(page, params);
    elements.push(text(TITLE_FRAME, vec![TextLine::plain(title, SLIDE_TITLE)]));
    Slide { name, elements }
}

fn cover(status: AggregateStatus, params: &ReportParams) -> Slide {
    let mut elements = chrome(1, params);
    elements.push(text(
        Rect::new(914_400, 1_828_800, 10_363_200, 1_600_200),
        vec![
            TextLine::plain(
                format!("{} {}", params.customer_name, params.engagement_name),
                COVER_TITLE,
            ),
            TextLine::plain("Professional Services Weekly Status", COVER_SUBTITLE),
        ],
    ));
    elements.push(text(
        Rect::new(914_400, 3_429_000, 10_363_200, 731_520),
        vec![
            TextLine::plain(params.report_date.format("%d %B %Y").to_string(), BODY_BOLD),
            TextLine::plain(params.period.clone(), BODY),
        ],
    ));
    elements.push(badge(
        Rect::new(914_400, 4_389_120, 1_828_800, 548_640),
        status,
    ));
    Slide {
        name: "cover",
        elements,
    }
}

fn agenda(params: &ReportParams) -> Slide {
    let mut slide = titled("agenda", 2, "Agenda".to_string(), params);
    let items = [
        "Teams",
        "Status Updates / Issues, risks",
        "High Level Plan",
        "Resource Plan",
        "Key Points to Discuss",
    ];
    slide.elements.push(text(
        BODY_FRAME,
        items
            .iter()
            .map(|item| TextLine::bullet(*item, BODY))
            .collect(),
    ));
    slide
}

fn teams(params: &ReportParams) -> Slide {
    let mut slide = titled("teams", 3, "Teams".to_string(), params);
    let panel_width = 5_486_400;
    slide.elements.push(text(
        Rect::new(457_200, 1_143_000, panel_width, 4_114_800),
        vec![
            TextLine::plain(params.customer_name.clone(), BODY_BOLD),
            TextLine::bullet("Customer sponsor", BODY),
            TextLine::bullet("Data lead", BODY),
            TextLine::bullet("Engineering lead", BODY),
        ],
    ));
    slide.elements.push(text(
        Rect::new(6_248_400, 1_143_000, panel_width, 4_114_800),
        vec![
            TextLine::plain("Delivery Partner", BODY_BOLD),
            TextLine::bullet("RSA", BODY),
            TextLine::bullet("Senior PM", BODY),
            TextLine::bullet("Delivery Engineers", BODY),
            TextLine::bullet("Account Team", BODY),
        ],
    ));
    slide
}

fn action_items(report: &UnifiedReport, params: &ReportParams) -> Slide {
    let mut slide = titled("action-items", 4, "Action Items".to_string(), params);
    let run_date = params.report_date.format("%Y-%m-%d").to_string();
    let mut rows: Vec<Vec<Cell>> = report
        .actions
        .iter()
        .enumerate()
        .map(|(i, action)| {
            vec![
                Cell::new((i + 1).to_string()),
                Cell::new(run_date.clone()),
                Cell::new(action.description.clone()),
                Cell::new(action.owner.clone()),
                Cell::new(action.status.clone()),
                Cell::new(action.comments.clone()),
            ]
        })
        .collect();
    if rows.is_empty() {
        rows.push(vec![
            Cell::new("1"),
            Cell::new("-"),
            Cell::new("No action items captured"),
            Cell::new("-"),
            Cell::new("-"),
            Cell::new("-"),
        ]);
    }
    slide.elements.push(Element::Table {
        frame: Rect::new(457_200, 1_143_000, 11_277_600, 4_800_600),
        col_widths: vec![685_800, 1_371_600, 3_886_200, 1_600_200, 1_371_600, 2_362_200],
        header: ["S. No.", "Date", "Description", "Owner", "Status", "Comments"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows,
    });
    slide.elements.push(text(
        Rect::new(457_200, 6_172_200, 11_277_600, 274_320),
        vec![TextLine::plain(
            "Legend: Complete | In Progress | At Risk | Blocked | Not Started",
            FINE,
        )],
    ));
    slide
}

fn engagement_status(
    report: &UnifiedReport,
    status: AggregateStatus,
    params: &ReportParams,
) -> Slide {
    let mut slide = titled(
        "engagement-status",
        5,
        "Engagement Status".to_string(),
        params,
    );
    slide
        .elements
        .push(badge(Rect::new(9_906_000, 411_480, 1_828_800, 548_640), status));

    let scope = status::scope_schedule_status(&report.risks);
    let sources = if report.sources.is_empty() {
        "source systems".to_string()
    } else {
        report.sources.join(", ")
    };
    let mut lines = vec![
        TextLine::plain(
            format!(
                "Scope: {} | Schedule: {} | Make-It-Right: Green",
                scope.label(),
                scope.label()
            ),
            BODY_BOLD,
        ),
        TextLine::plain(
            format!(
                "Weekly data consolidated from {} for period {}.",
                sources, params.period
            ),
            BODY,
        ),
        TextLine::plain(String::new(), BODY),
        TextLine::plain(
            format!("Key Accomplishments ({})", params.period),
            BODY_BOLD,
        ),
    ];
    if report.accomplishments.is_empty() {
        lines.push(TextLine::bullet("No source updates captured.", BODY));
    } else {
        for accomplishment in &report.accomplishments {
            lines.push(TextLine::bullet(accomplishment.clone(), BODY));
        }
    }
    lines.push(TextLine::plain(String::new(), BODY));
    lines.push(TextLine::plain("Activities for next period", BODY_BOLD));
    if report.next_steps.is_empty() {
        lines.push(TextLine::bullet(
            "Confirm source updates and define action owners.",
            BODY,
        ));
    } else {
        for step in &report.next_steps {
            lines.push(TextLine::bullet(step.clone(), BODY));
        }
    }
    slide.elements.push(text(BODY_FRAME, lines));
    slide
}

fn risk_register(report: &UnifiedReport, params: &ReportParams) -> Slide {
    let mut slide = titled("risk-issue", 6, "Risk & Issue".to_string(), params);
    let mut rows: Vec<Vec<Cell>> = report
        .risks
        .iter()
        .enumerate()
        .map(|(i, risk)| {
            vec![
                Cell::new(format!("{:02}", i + 1)),
                Cell::new("Risk"),
                Cell::new(risk.description.clone()),
                Cell::colored(risk.impact.clone(), status::color_for_impact(&risk.impact)),
                Cell::new(risk.probability.clone()),
                Cell::new(risk.action.clone()),
                Cell::new(risk.status.clone()),
            ]
        })
        .collect();
    if rows.is_empty() {
        rows.push(vec![
            Cell::new("01"),
            Cell::new("Risk"),
            Cell::new("No high-severity risks captured"),
            Cell::new("Low"),
            Cell::new("Low"),
            Cell::new("Continue monitoring - PM"),
            Cell::new("Open"),
        ]);
    }
    slide.elements.push(Element::Table {
        frame: Rect::new(457_200, 1_143_000, 11_277_600, 4_800_600),
        col_widths: vec![
            548_640, 731_520, 3_383_280, 1_005_840, 1_097_280, 3_108_960, 1_402_080,
        ],
        header: [
            "ID",
            "Type",
            "Description",
            "Impact",
            "Probability",
            "Action(s) - Owner",
            "Status",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        rows,
    });
    slide
}

fn resource_plan(params: &ReportParams) -> Slide {
    let mut slide = titled("resource-plan", 7, "Resource Plan".to_string(), params);
    let rows = [
        ["Delivery Lead", "Project Delivery", "128", "16", "16", "16", "16", "16", "16"],
        ["Data Engineer", "Engineering", "240", "40", "40", "40", "40", "40", "40"],
        ["PM", "Project Management", "64", "8", "8", "8", "8", "8", "8"],
        ["RSA", "Architecture / Advisory", "32", "8", "8", "8", "8", "-", "-"],
    ];
    slide.elements.push(Element::Table {
        frame: Rect::new(457_200, 1_143_000, 11_277_600, 2_743_200),
        col_widths: vec![
            2_194_560, 2_331_720, 914_400, 972_820, 972_820, 972_820, 972_820, 972_820, 972_820,
        ],
        header: ["Name", "Role", "Hours", "19/1", "26/1", "2/2", "9/2", "16/2", "23/2"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|cell| Cell::new(*cell)).collect())
            .collect(),
    });
    slide
}

fn plan_tracking(params: &ReportParams) -> Slide {
    let mut slide = titled("plan-tracking", 8, "Plan Tracking".to_string(), params);
    slide.elements.push(text(
        BODY_FRAME,
        vec![TextLine::plain(
            format!(
                "{} {} delivery is tracked in the customer's agreed work tracking board.",
                params.customer_name, params.engagement_name
            ),
            BODY,
        )],
    ));
    slide
}

fn thank_you(params: &ReportParams) -> Slide {
    let mut elements = chrome(9, params);
    elements.push(text(
        Rect::new(914_400, 2_743_200, 10_363_200, 1_600_200),
        vec![
            TextLine::plain("Thank You", COVER_TITLE),
            TextLine::plain(
                format!(
                    "{} {} - Professional Services",
                    params.customer_name, params.engagement_name
                ),
                COVER_SUBTITLE,
            ),
        ],
    ));
    Slide {
        name: "thank-you",
        elements,
    }
}

fn prior_period_status(params: &ReportParams) -> Slide {
    let mut slide = titled(
        "engagement-status-prior",
        10,
        "Engagement Status - Prior Period".to_string(),
        params,
    );
    slide.elements.push(text(
        Rect::new(457_200, 1_143_000, 11_277_600, 1_371_600),
        vec![TextLine::plain(
            "Delivery continued across the discovery, build, and reporting workstreams. \
             Weekly consolidation of source signals stayed on cadence, and governance \
             checkpoints were held as planned.",
            BODY,
        )],
    ));
    slide.elements.push(Element::Table {
        frame: Rect::new(457_200, 2_743_200, 11_277_600, 2_057_400),
        col_widths: vec![5_638_800, 2_819_400, 2_819_400],
        header: ["Item", "Status", "Target Date"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: [
            ["Discovery & Design Alignment", "In Progress", "TBC"],
            ["Build / Validation Stream", "In Progress", "TBC"],
            ["Reporting & Handover", "In Progress", "TBC"],
        ]
        .iter()
        .map(|row| row.iter().map(|cell| Cell::new(*cell)).collect())
        .collect(),
    });
    slide
}

/// Points to discuss fall back through three tiers: risks, then next steps,
/// then a fixed sentence.
fn points_to_discuss(report: &UnifiedReport) -> Vec<String> {
    if !report.risks.is_empty() {
        report
            .risks
            .iter()
            .take(4)
            .map(|r: &RiskItem| r.description.clone())
            .collect()
    } else if !report.next_steps.is_empty() {
        report.next_steps.iter().take(4).cloned().collect()
    } else {
        vec!["No high-severity points to discuss this period.".to_string()]
    }
}

fn earlier_snapshot(
    report: &UnifiedReport,
    status: AggregateStatus,
    params: &ReportParams,
) -> Slide {
    let mut slide = titled(
        "engagement-status-earlier",
        11,
        "Engagement Status - Key Points to Discuss".to_string(),
        params,
    );
    slide
        .elements
        .push(badge(Rect::new(9_906_000, 411_480, 1_828_800, 548_640), status));
    let mut lines = vec![TextLine::plain("Points to discuss", BODY_BOLD)];
    for point in points_to_discuss(report) {
        lines.push(TextLine::bullet(point, BODY));
    }
    slide.elements.push(text(
        Rect::new(457_200, 1_143_000, 11_277_600, 1_828_800),
        lines,
    ));
    slide.elements.push(Element::Table {
        frame: Rect::new(457_200, 3_200_400, 11_277_600, 2_057_400),
        col_widths: vec![3_383_280, 2_255_520, 5_638_800],
        header: ["Item", "Current Status", "Notes"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        rows: [
            [
                "Requirements & Design",
                "In Progress",
                "Design decisions and stakeholder approvals in progress.",
            ],
            [
                "Build & Validation",
                "In Progress",
                "Weekly execution and quality checks across workstreams.",
            ],
            [
                "Readout & Handover",
                "In Progress",
                "Reporting cadence and governance updates.",
            ],
        ]
        .iter()
        .map(|row| row.iter().map(|cell| Cell::new(*cell)).collect())
        .collect(),
    });
    slide
}

/// Lay out the full deck: a strict linear sequence over the fixed template.
/// The only content-dependent branching is empty-collection placeholders and
/// badge color selection.
pub fn build_deck(report: &UnifiedReport, status: AggregateStatus, params: &ReportParams) -> Deck {
    Deck {
        title: format!(
            "{} {} - Weekly Status Report",
            params.customer_name, params.engagement_name
        ),
        slides: vec![
            cover(status, params),
            agenda(params),
            teams(params),
            action_items(report, params),
            engagement_status(report, status, params),
            risk_register(report, params),
            resource_plan(params),
            plan_tracking(params),
            thank_you(params),
            prior_period_status(params),
            earlier_snapshot(report, status, params),
        ],
    }
}

/// Lower-cased, hyphen-collapsed derivation of a free-text name, falling back
/// to "customer" when nothing alphanumeric survives.
pub fn slugify(value: &str) -> String {
    let mut slug = String::new();
    for ch in value.trim().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "customer".to_string()
    } else {
        slug.to_string()
    }
}

/// Deterministic artifact name for a run.
pub fn artifact_file_name(customer: &str, engagement: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}_ps_weekly_status_{}.pptx",
        slugify(customer),
        slugify(engagement),
        date.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{normalize, SourcePayloads};
    use serde_json::json;

    fn params() -> ReportParams {
        ReportParams {
            period: "Current reporting period".to_string(),
            customer_name: "Ventia".to_string(),
            engagement_name: "Supply Chain".to_string(),
            report_date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
        }
    }

    fn tables(slide: &Slide) -> Vec<&Vec<Vec<Cell>>> {
        slide
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Table { rows, .. } => Some(rows),
                _ => None,
            })
            .collect()
    }

    fn all_text(slide: &Slide) -> String {
        let mut out = String::new();
        for element in &slide.elements {
            match element {
                Element::Text { lines, .. } => {
                    for line in lines {
                        out.push_str(&line.text);
                        out.push('\n');
                    }
                }
                Element::Shape {
                    label: Some((label, _)),
                    ..
                } => {
                    out.push_str(label);
                    out.push('\n');
                }
                _ => {}
            }
        }
        out
    }

    #[test]
    fn slugify_collapses_and_falls_back() {
        assert_eq!(slugify("Ventia!! Co"), "ventia-co");
        assert_eq!(slugify(""), "customer");
        assert_eq!(slugify("  --  "), "customer");
        assert_eq!(slugify("Supply Chain"), "supply-chain");
        assert_eq!(slugify("A&B  Ops"), "a-b-ops");
    }

    #[test]
    fn artifact_name_is_deterministic() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(
            artifact_file_name("Ventia", "Supply Chain", date),
            "ventia_supply-chain_ps_weekly_status_2026-08-07.pptx"
        );
        assert_eq!(
            artifact_file_name("", "", date),
            "customer_customer_ps_weekly_status_2026-08-07.pptx"
        );
    }

    #[test]
    fn deck_has_eleven_chromed_slides() {
        let deck = build_deck(&UnifiedReport::default(), AggregateStatus::Green, &params());
        assert_eq!(deck.slides.len(), SLIDE_COUNT);
        for (i, slide) in deck.slides.iter().enumerate() {
            let text = all_text(slide);
            assert!(
                text.contains(&format!("{} of 11", i + 1)),
                "slide {} missing page number",
                i + 1
            );
            let bands = slide
                .elements
                .iter()
                .filter(|e| matches!(e, Element::Shape { fill, .. } if *fill == BRAND_DARK))
                .count();
            assert!(bands >= 2, "slide {} missing brand bands", i + 1);
        }
    }

    #[test]
    fn empty_report_renders_placeholder_rows() {
        let deck = build_deck(&UnifiedReport::default(), AggregateStatus::Green, &params());
        let action_rows = tables(&deck.slides[3])[0];
        assert_eq!(action_rows.len(), 1);
        assert_eq!(action_rows[0][2].text, "No action items captured");
        assert_eq!(action_rows[0][1].text, "-");

        let risk_rows = tables(&deck.slides[5])[0];
        assert_eq!(risk_rows.len(), 1);
        assert_eq!(risk_rows[0][0].text, "01");
        assert_eq!(risk_rows[0][2].text, "No high-severity risks captured");
        assert_eq!(risk_rows[0][5].text, "Continue monitoring - PM");

        let status_text = all_text(&deck.slides[4]);
        assert!(status_text.contains("No source updates captured."));
        assert!(status_text.contains("Confirm source updates and define action owners."));
        assert!(status_text.contains("Scope: Green | Schedule: Green | Make-It-Right: Green"));
    }

    #[test]
    fn populated_report_binds_rows_and_colors() {
        let payloads = SourcePayloads {
            chat: Some(json!({"messages": [{
                "title": "API outage", "owner": "Sam", "impact": "Critical",
                "detail": "Prod down", "action": "Page on-call - Sam"
            }]})),
            ..Default::default()
        };
        let report = normalize(&payloads);
        let status = AggregateStatus::classify(&report.risks);
        assert_eq!(status, AggregateStatus::Red);
        let deck = build_deck(&report, status, &params());

        // Cover badge picks up the red token.
        let cover_badge = deck.slides[0].elements.iter().find_map(|e| match e {
            Element::Shape {
                fill,
                label: Some((label, _)),
                ..
            } => Some((*fill, label.clone())),
            _ => None,
        });
        assert_eq!(cover_badge, Some((status::RED_HEX, "Red".to_string())));

        let action_rows = tables(&deck.slides[3])[0];
        assert_eq!(action_rows[0][2].text, "API outage");
        assert_eq!(action_rows[0][1].text, "2026-08-07");
        assert_eq!(action_rows[0][4].text, "At Risk");

        let risk_rows = tables(&deck.slides[5])[0];
        assert_eq!(risk_rows[0][2].text, "API outage - Prod down");
        assert_eq!(risk_rows[0][3].color, Some(status::RED_HEX));
        assert_eq!(risk_rows[0][4].text, "Med");
    }

    #[test]
    fn points_to_discuss_falls_through_three_tiers() {
        let mut report = UnifiedReport::default();
        assert_eq!(
            points_to_discuss(&report),
            vec!["No high-severity points to discuss this period.".to_string()]
        );

        report.next_steps = (0..6).map(|i| format!("step {i}")).collect();
        assert_eq!(points_to_discuss(&report).len(), 4);
        assert_eq!(points_to_discuss(&report)[0], "step 0");

        report.risks = vec![crate::model::RiskItem {
            description: "API outage - Prod down".to_string(),
            impact: "Critical".to_string(),
            probability: "Med".to_string(),
            action: "Page on-call - Sam".to_string(),
            status: "open".to_string(),
        }];
        assert_eq!(
            points_to_discuss(&report),
            vec!["API outage - Prod down".to_string()]
        );
    }

    #[test]
    fn rebuild_is_semantically_identical() {
        let payloads = SourcePayloads {
            crm: Some(json!({"opportunities": [
                {"account": "Acme", "name": "Renewal", "risk": "High", "next_step": "Call"}
            ]})),
            ..Default::default()
        };
        let report = normalize(&payloads);
        let status = AggregateStatus::classify(&report.risks);
        let first = build_deck(&report, status, &params());
        let second = build_deck(&report, status, &params());
        assert_eq!(first, second);
    }
}
