use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::manifest::report::Reporter;
use crate::manifest::types::Node;
use crate::validators::{port_validator, probe_validator, resources_validator};

static NAME_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").unwrap());
static IMAGE_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^registry\.bigbrother\.io/.+:.+$").unwrap());

pub fn validate_container(container: &Node, seen_names: &mut HashSet<String>, rep: &mut Reporter) {
    match container.field("name") {
        None => rep.add_required("containers.name"),
        Some(node) => match node.as_str() {
            None => rep.add(node.line, "name must be string"),
            Some(value) if value.trim().is_empty() => rep.add(node.line, "name is required"),
            Some(value) if !NAME_FORMAT.is_match(value) => {
                rep.add(node.line, format!("name has invalid format '{}'", value));
            }
            Some(value) => {
                // First occurrence registers the name; repeats are flagged
                // on their own line.
                if !seen_names.insert(value.to_string()) {
                    rep.add(node.line, "name has invalid format 'duplicate'");
                }
            }
        },
    }

    match container.field("image") {
        None => rep.add_required("containers.image"),
        Some(node) => match node.as_str() {
            None => rep.add(node.line, "image must be string"),
            Some(value) if !IMAGE_FORMAT.is_match(value) => {
                rep.add(node.line, format!("image has invalid format '{}'", value));
            }
            Some(_) => {}
        },
    }

    if let Some(ports) = container.field("ports") {
        match ports.items() {
            None => rep.add(ports.line, "ports must be array"),
            Some(items) => {
                for item in items {
                    if !item.is_mapping() {
                        rep.add(item.line, "ports item must be object");
                        continue;
                    }
                    port_validator::validate_container_port(item, rep);
                }
            }
        }
    }

    if let Some(probe) = container.field("readinessProbe") {
        probe_validator::validate_probe(probe, rep, "readinessProbe");
    }
    if let Some(probe) = container.field("livenessProbe") {
        probe_validator::validate_probe(probe, rep, "livenessProbe");
    }

    match container.field("resources") {
        None => rep.add_required("containers.resources"),
        Some(node) => resources_validator::validate_resources(node, rep),
    }
}
