use std::collections::HashSet;

use crate::manifest::report::Reporter;
use crate::manifest::types::{Node, NodeContent};
use crate::validators::container_validator;

const VALID_OS: [&str; 2] = ["linux", "windows"];

pub fn validate_pod_spec(spec: &Node, rep: &mut Reporter) {
    if let Some(os) = spec.field("os") {
        validate_os(os, rep);
    }

    let containers = match spec.field("containers") {
        None => {
            rep.add_required("spec.containers");
            return;
        }
        Some(node) => node,
    };
    let items = match containers.items() {
        None => {
            rep.add(containers.line, "containers must be array");
            return;
        }
        Some(items) => items,
    };
    if items.is_empty() {
        // The schema requires at least one container; this is a range
        // violation on the existing sequence, not a missing field.
        rep.add(containers.line, "containers value out of range");
    }

    // Container names must be unique across the whole pod.
    let mut seen_names = HashSet::new();
    for item in items {
        if !item.is_mapping() {
            rep.add(item.line, "container must be object");
            continue;
        }
        container_validator::validate_container(item, &mut seen_names, rep);
    }
}

/// `os` comes in two accepted shapes: a bare string, or an object carrying
/// a required `name`. Both resolve to the same fixed set.
fn validate_os(os: &Node, rep: &mut Reporter) {
    match &os.content {
        NodeContent::Scalar { .. } => match os.as_str() {
            None => rep.add(os.line, "os must be string"),
            Some(value) if !VALID_OS.contains(&value) => {
                rep.add(os.line, format!("os has unsupported value '{}'", value));
            }
            Some(_) => {}
        },
        NodeContent::Mapping(_) => match os.field("name") {
            None => rep.add_required("spec.os.name"),
            Some(name) => match name.as_str() {
                None => rep.add(name.line, "os.name must be string"),
                Some(value) if !VALID_OS.contains(&value) => {
                    rep.add(name.line, format!("os has unsupported value '{}'", value));
                }
                Some(_) => {}
            },
        },
        NodeContent::Sequence(_) => rep.add(os.line, "os must be string or object"),
    }
}
