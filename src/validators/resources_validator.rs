use once_cell::sync::Lazy;
use regex::Regex;

use crate::manifest::report::Reporter;
use crate::manifest::types::Node;

// An integer quantity with a binary-unit suffix, e.g. 512Mi.
static MEMORY_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(Gi|Mi|Ki)$").unwrap());

pub fn validate_resources(resources: &Node, rep: &mut Reporter) {
    if !resources.is_mapping() {
        rep.add(resources.line, "resources must be object");
        return;
    }

    if let Some(limits) = resources.field("limits") {
        validate_resource_kv(limits, rep, "resources.limits");
    }
    if let Some(requests) = resources.field("requests") {
        validate_resource_kv(requests, rep, "resources.requests");
    }
}

pub fn validate_resource_kv(kv: &Node, rep: &mut Reporter, prefix: &str) {
    let pairs = match kv.pairs() {
        None => {
            rep.add(kv.line, format!("{} must be object", prefix));
            return;
        }
        Some(pairs) => pairs,
    };

    for (key, value) in pairs {
        let key_name = match key.as_str() {
            None => {
                rep.add(key.line, format!("{} key must be string", prefix));
                continue;
            }
            Some(name) => name,
        };
        match key_name {
            "cpu" => match value.as_int() {
                None => rep.add(value.line, "cpu must be int"),
                Some(quantity) if quantity < 0 => rep.add(value.line, "cpu value out of range"),
                Some(_) => {}
            },
            "memory" => match value.as_str() {
                None => rep.add(value.line, "memory must be string"),
                Some(quantity) if !MEMORY_FORMAT.is_match(quantity) => rep.add(
                    value.line,
                    format!("resources.limits.memory has invalid format '{}'", quantity),
                ),
                Some(_) => {}
            },
            // unrecognized keys are ignored
            _ => {}
        }
    }
}
