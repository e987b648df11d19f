use crate::manifest::report::Reporter;
use crate::manifest::types::Node;
use crate::validators::port_validator::PORT_RANGE;

/// `prefix` is the field path of the probe (`readinessProbe` or
/// `livenessProbe`) and prefixes the required-field diagnostics.
pub fn validate_probe(probe: &Node, rep: &mut Reporter, prefix: &str) {
    if !probe.is_mapping() {
        rep.add(probe.line, format!("{} must be object", prefix));
        return;
    }

    let http_get = match probe.field("httpGet") {
        None => {
            rep.add_required(&format!("{}.httpGet", prefix));
            return;
        }
        Some(node) => node,
    };
    if !http_get.is_mapping() {
        rep.add(http_get.line, "httpGet must be object");
        return;
    }

    match http_get.field("path") {
        None => rep.add_required(&format!("{}.httpGet.path", prefix)),
        Some(node) => match node.as_str() {
            None => rep.add(node.line, "path must be string"),
            Some(value) if !value.starts_with('/') => {
                rep.add(node.line, format!("path has invalid format '{}'", value));
            }
            Some(_) => {}
        },
    }

    match http_get.field("port") {
        None => rep.add_required(&format!("{}.httpGet.port", prefix)),
        Some(node) => match node.as_int() {
            None => rep.add(node.line, "port must be int"),
            Some(value) if !PORT_RANGE.contains(&value) => {
                rep.add(node.line, "port value out of range");
            }
            Some(_) => {}
        },
    }
}
