pub mod manifest;
pub mod validators;

use manifest::parsing;
use manifest::report::Reporter;
use manifest::types::LintError;
use validators::pod_validator;

/// Validates every document in `input` as a Pod manifest and returns the
/// accumulated diagnostics. `file` is the display name used in the report.
pub fn lint(input: &str, file: &str) -> Result<Reporter, LintError> {
    let documents = parsing::load_documents(input)?;
    if documents.is_empty() {
        return Err(LintError::EmptyDocument);
    }

    let mut reporter = Reporter::new(file);
    for document in &documents {
        pod_validator::validate_pod(document, &mut reporter);
    }

    Ok(reporter)
}
