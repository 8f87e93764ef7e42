use std::fmt;
use std::str::FromStr;

/// The two extraction profiles a client can select at upload time. The
/// wire strings are part of the public API contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionTemplate {
    /// Deep per-position extraction from a private equity fund report.
    FundReportDetail,
    /// Condensed portfolio-level summary extraction.
    PortfolioSummary,
}

impl ExtractionTemplate {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionTemplate::FundReportDetail => "Extraction Template 1",
            ExtractionTemplate::PortfolioSummary => "Extraction Template 2",
        }
    }

    /// Sheets the LLM response must contain for this template, in the
    /// order they appear in the generated workbook.
    pub fn expected_sheets(&self) -> &'static [&'static str] {
        match self {
            ExtractionTemplate::FundReportDetail => &[
                "Fund Data",
                "Fund Manager",
                "Company Investment Positions",
                "Financial Summary",
            ],
            ExtractionTemplate::PortfolioSummary => &[
                "Portfolio Summary",
                "Schedule of Investments",
                "Performance Metrics",
            ],
        }
    }
}

impl FromStr for ExtractionTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Extraction Template 1" => Ok(ExtractionTemplate::FundReportDetail),
            "Extraction Template 2" => Ok(ExtractionTemplate::PortfolioSummary),
            _ => Err(format!("Invalid template selection: {}", s)),
        }
    }
}

impl fmt::Display for ExtractionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
