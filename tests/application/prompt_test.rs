use fundex::application::services::build_extraction_prompt;
use fundex::domain::ExtractionTemplate;

#[test]
fn given_fund_report_template_when_building_prompt_then_schema_and_text_are_embedded() {
    let text = "NAV as of 2024-12-31: USD 180 million";
    let prompt = build_extraction_prompt(ExtractionTemplate::FundReportDetail, text);

    assert!(prompt.contains("Extraction Template 1"));
    assert!(prompt.contains("\"Fund Data\""));
    assert!(prompt.contains("\"Company Investment Positions\""));
    assert!(prompt.contains("**Input Text from PDF:**"));
    assert!(prompt.contains(text));
}

#[test]
fn given_portfolio_template_when_building_prompt_then_schema_and_text_are_embedded() {
    let text = "Schedule of investments follows.";
    let prompt = build_extraction_prompt(ExtractionTemplate::PortfolioSummary, text);

    assert!(prompt.contains("Extraction Template 2"));
    assert!(prompt.contains("\"Portfolio Summary\""));
    assert!(prompt.contains("\"Schedule of Investments\""));
    assert!(prompt.contains(text));
}

#[test]
fn given_both_templates_when_building_prompts_then_instructions_differ() {
    let first = build_extraction_prompt(ExtractionTemplate::FundReportDetail, "same text");
    let second = build_extraction_prompt(ExtractionTemplate::PortfolioSummary, "same text");

    assert_ne!(first, second);
}

#[test]
fn given_every_expected_sheet_then_prompt_schema_mentions_it() {
    for template in [
        ExtractionTemplate::FundReportDetail,
        ExtractionTemplate::PortfolioSummary,
    ] {
        let prompt = build_extraction_prompt(template, "text");
        for sheet in template.expected_sheets() {
            assert!(
                prompt.contains(&format!("\"{}\"", sheet)),
                "prompt for {} does not mention sheet {}",
                template,
                sheet
            );
        }
    }
}
