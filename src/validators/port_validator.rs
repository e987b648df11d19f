use std::ops::RangeInclusive;

use crate::manifest::report::Reporter;
use crate::manifest::types::Node;

pub const PORT_RANGE: RangeInclusive<i64> = 1..=65535;

const VALID_PROTOCOLS: [&str; 2] = ["TCP", "UDP"];

pub fn validate_container_port(port: &Node, rep: &mut Reporter) {
    match port.field("containerPort") {
        None => rep.add_required("ports.containerPort"),
        Some(node) => match node.as_int() {
            None => rep.add(node.line, "containerPort must be int"),
            Some(value) if !PORT_RANGE.contains(&value) => {
                rep.add(node.line, "containerPort value out of range");
            }
            Some(_) => {}
        },
    }

    if let Some(node) = port.field("protocol") {
        match node.as_str() {
            None => rep.add(node.line, "protocol must be string"),
            Some(value) if !VALID_PROTOCOLS.contains(&value) => {
                rep.add(node.line, format!("protocol has unsupported value '{}'", value));
            }
            Some(_) => {}
        }
    }
}
