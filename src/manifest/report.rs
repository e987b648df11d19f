use std::fmt;
use std::io;

use colored::Colorize;
use serde::Serialize;

/// One reported schema violation. `line` is absent exactly for
/// "required field is missing" diagnostics, which have no source position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{} {}", self.file, line, self.message),
            None => write!(f, "{}: {}", self.file, self.message),
        }
    }
}

/// Accumulates diagnostics for one validation run, in emission order.
/// Nothing is deduplicated or sorted.
pub struct Reporter {
    file: String,
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new(file: impl Into<String>) -> Self {
        Reporter {
            file: file.into(),
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, line: usize, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            file: self.file.clone(),
            line: Some(line),
            message: message.into(),
        });
    }

    /// Reports an absent required field by its dotted path. There is no
    /// node to point at, so the diagnostic carries no line.
    pub fn add_required(&mut self, field: &str) {
        self.diagnostics.push(Diagnostic {
            file: self.file.clone(),
            line: None,
            message: format!("{} is required", field),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn flush<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(sink, "{}", diagnostic)?;
        }
        Ok(())
    }
}

pub fn error_header(head: &str) -> String {
    format!("  {}  ", head).on_red().black().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flushed(reporter: &Reporter) -> String {
        let mut buffer = Vec::new();
        reporter.flush(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn flush_prints_line_when_present() {
        let mut reporter = Reporter::new("pod.yml");
        reporter.add(3, "kind must be string");
        assert_eq!(flushed(&reporter), "pod.yml:3 kind must be string\n");
    }

    #[test]
    fn flush_omits_line_for_required_fields() {
        let mut reporter = Reporter::new("pod.yml");
        reporter.add_required("metadata.name");
        assert_eq!(flushed(&reporter), "pod.yml: metadata.name is required\n");
    }

    #[test]
    fn diagnostics_keep_emission_order() {
        let mut reporter = Reporter::new("pod.yml");
        reporter.add(9, "later line first");
        reporter.add_required("spec");
        reporter.add(2, "earlier line last");
        assert_eq!(
            flushed(&reporter),
            "pod.yml:9 later line first\npod.yml: spec is required\npod.yml:2 earlier line last\n"
        );
    }

    #[test]
    fn has_errors_reflects_accumulation() {
        let mut reporter = Reporter::new("pod.yml");
        assert!(!reporter.has_errors());
        reporter.add(1, "root must be object");
        assert!(reporter.has_errors());
    }

    #[test]
    fn diagnostics_serialize_without_null_lines() {
        let mut reporter = Reporter::new("pod.yml");
        reporter.add_required("spec.containers");
        let json = serde_json::to_string(reporter.diagnostics()).unwrap();
        assert_eq!(
            json,
            r#"[{"file":"pod.yml","message":"spec.containers is required"}]"#
        );
    }
}
