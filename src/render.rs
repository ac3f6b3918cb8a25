use crate::model::{ComplianceStatus, IngredientResult};

/// Visual treatment of a status label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusStyle {
    Success,
    Danger,
    Muted,
}

impl StatusStyle {
    /// CSS class used by the web front end for this style
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusStyle::Success => "text-success",
            StatusStyle::Danger => "text-danger",
            StatusStyle::Muted => "text-muted",
        }
    }
}

impl ComplianceStatus {
    pub fn style(&self) -> StatusStyle {
        match self {
            ComplianceStatus::Compliant => StatusStyle::Success,
            ComplianceStatus::NonCompliant => StatusStyle::Danger,
            ComplianceStatus::Unknown => StatusStyle::Muted,
        }
    }
}

/// Render results as a numbered plain-text list
pub fn render_results(results: &[IngredientResult]) -> String {
    let mut output = String::new();

    for (index, result) in results.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{}. {} [{}]\n",
            index + 1,
            result.ingredient,
            result.status
        ));
        output.push_str(&format!("   Normalized: {}\n", result.normalized));
        output.push_str(&format!("   Max Level: {}\n", result.max_level));
        output.push_str(&format!("   Regulation: {}\n", result.regulation));
        output.push_str(&format!("   {}\n", result.explanation));
    }

    output
}

/// Render results as a Markdown table
pub fn render_table(results: &[IngredientResult]) -> String {
    if results.is_empty() {
        return "No compliance information found for the given input.".to_string();
    }

    let header = "| Ingredient | Status | Max Level | Regulation |\n|---|---|---|---|";
    let rows: Vec<String> = results
        .iter()
        .map(|result| {
            format!(
                "| {} | {} | {} | {} |",
                escape_cell(&result.ingredient),
                result.status,
                escape_cell(&result.max_level),
                escape_cell(&result.regulation)
            )
        })
        .collect();

    format!("{}\n{}", header, rows.join("\n"))
}

fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
