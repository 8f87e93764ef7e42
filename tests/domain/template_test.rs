use std::str::FromStr;

use fundex::domain::ExtractionTemplate;

#[test]
fn given_exact_wire_strings_when_parsing_then_templates_resolve() {
    assert_eq!(
        ExtractionTemplate::from_str("Extraction Template 1").unwrap(),
        ExtractionTemplate::FundReportDetail
    );
    assert_eq!(
        ExtractionTemplate::from_str("Extraction Template 2").unwrap(),
        ExtractionTemplate::PortfolioSummary
    );
}

#[test]
fn given_near_miss_strings_when_parsing_then_returns_error() {
    assert!(ExtractionTemplate::from_str("extraction template 1").is_err());
    assert!(ExtractionTemplate::from_str("Extraction Template 3").is_err());
    assert!(ExtractionTemplate::from_str("").is_err());
}

#[test]
fn given_template_when_formatting_then_wire_string_round_trips() {
    for template in [
        ExtractionTemplate::FundReportDetail,
        ExtractionTemplate::PortfolioSummary,
    ] {
        assert_eq!(
            ExtractionTemplate::from_str(template.as_str()).unwrap(),
            template
        );
    }
}

#[test]
fn given_templates_then_expected_sheets_are_distinct_and_nonempty() {
    let detail = ExtractionTemplate::FundReportDetail.expected_sheets();
    let summary = ExtractionTemplate::PortfolioSummary.expected_sheets();

    assert!(detail.contains(&"Fund Data"));
    assert!(detail.contains(&"Company Investment Positions"));
    assert!(summary.contains(&"Schedule of Investments"));
    assert!(!detail.iter().any(|s| summary.contains(s)));
}
