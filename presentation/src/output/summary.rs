//! Console formatter for the assessment summary printed on exit

use aiq_application::AssessmentSummary;
use aiq_domain::{AiqRating, Relevance};
use colored::Colorize;

/// Formats the final assessment for console display
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Human-readable summary
    pub fn format(summary: &AssessmentSummary) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AIQ Assessment Summary"));
        output.push('\n');

        for (index, question) in summary.questions.iter().enumerate() {
            let mark = match question.relevance {
                Relevance::Relevant => "relevant".green().bold().to_string(),
                Relevance::NonRelevant => "non-relevant".red().to_string(),
                Relevance::Unset => "unset".dimmed().to_string(),
            };
            output.push_str(&format!(
                "{:02}. [{}] {}\n",
                index + 1,
                mark,
                question.prompt
            ));
        }

        output.push_str(&format!(
            "\n{} {} of {}\n",
            "Relevant:".cyan().bold(),
            summary.relevant_count,
            summary.questions.len()
        ));

        let level = match summary.rating {
            AiqRating::High => summary.rating.label().green().bold(),
            AiqRating::Medium => summary.rating.label().yellow().bold(),
            AiqRating::Low => summary.rating.label().red().bold(),
            AiqRating::Undetermined => summary.rating.label().dimmed(),
        };
        output.push_str(&format!("{} {}\n", "AIQ Level:".cyan().bold(), level));

        if summary.notes.is_empty() {
            output.push_str(&format!("\n{} (none)\n", "Notes:".cyan().bold()));
        } else {
            output.push_str(&format!("\n{}\n{}\n", "Notes:".cyan().bold(), summary.notes));
        }

        output
    }

    /// JSON snapshot of the assessment
    pub fn format_json(summary: &AssessmentSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
            format!("{{\"error\": \"failed to serialize summary: {}\"}}", e)
        })
    }

    fn header(title: &str) -> String {
        format!(
            "{}\n{}\n",
            title.white().bold(),
            "=".repeat(title.len()).dimmed()
        )
    }
}
