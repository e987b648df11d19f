use crate::manifest::report::Reporter;
use crate::manifest::types::Node;
use crate::validators::{metadata_validator, spec_validator};

/// Validates one top-level document as a Pod. The four top-level fields
/// are independent: a failure in one never skips the others.
pub fn validate_pod(doc: &Node, rep: &mut Reporter) {
    if !doc.is_mapping() {
        rep.add(doc.line, "root must be object");
        return;
    }

    match doc.field("apiVersion") {
        None => rep.add_required("apiVersion"),
        Some(node) => match node.as_str() {
            None => rep.add(node.line, "apiVersion must be string"),
            Some("v1") => {}
            Some(value) => rep.add(
                node.line,
                format!("apiVersion has unsupported value '{}'", value),
            ),
        },
    }

    match doc.field("kind") {
        None => rep.add_required("kind"),
        Some(node) => match node.as_str() {
            None => rep.add(node.line, "kind must be string"),
            Some("Pod") => {}
            Some(value) => rep.add(node.line, format!("kind has unsupported value '{}'", value)),
        },
    }

    match doc.field("metadata") {
        None => rep.add_required("metadata"),
        Some(node) if !node.is_mapping() => rep.add(node.line, "metadata must be object"),
        Some(node) => metadata_validator::validate_metadata(node, rep),
    }

    match doc.field("spec") {
        None => rep.add_required("spec"),
        Some(node) if !node.is_mapping() => rep.add(node.line, "spec must be object"),
        Some(node) => spec_validator::validate_pod_spec(node, rep),
    }
}
