//! Builds the manifest tree from YAML source, keeping source lines.
//!
//! The high-level `YamlLoader` drops markers and merges duplicate mapping
//! keys, so the tree is built from the low-level parser events instead.

use std::collections::BTreeMap;

use yaml_rust::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust::scanner::{Marker, ScanError, TScalarStyle, TokenType};

use super::types::{Node, NodeContent, ScalarTag};

/// Parses every document in `input` into a tree. An input with no
/// documents at all (empty source, comments only) yields an empty vec.
pub fn load_documents(input: &str) -> Result<Vec<Node>, ScanError> {
    let mut parser = Parser::new(input.chars());
    let mut builder = TreeBuilder::default();
    parser.load(&mut builder, true)?;
    Ok(builder.docs)
}

#[derive(Default)]
struct TreeBuilder {
    docs: Vec<Node>,
    stack: Vec<Frame>,
    anchors: BTreeMap<usize, Node>,
}

enum Frame {
    Sequence {
        line: usize,
        anchor: usize,
        items: Vec<Node>,
    },
    Mapping {
        line: usize,
        anchor: usize,
        entries: Vec<(Node, Node)>,
        pending_key: Option<Node>,
    },
}

impl TreeBuilder {
    fn push_node(&mut self, node: Node, anchor: usize) {
        if anchor > 0 {
            self.anchors.insert(anchor, node.clone());
        }
        match self.stack.last_mut() {
            None => self.docs.push(node),
            Some(Frame::Sequence { items, .. }) => items.push(node),
            Some(Frame::Mapping {
                entries,
                pending_key,
                ..
            }) => match pending_key.take() {
                None => *pending_key = Some(node),
                Some(key) => entries.push((key, node)),
            },
        }
    }
}

impl MarkedEventReceiver for TreeBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        match ev {
            Event::Scalar(value, style, anchor, tag) => {
                let tag = resolve_scalar_tag(&value, style, tag.as_ref());
                let node = Node {
                    line: marker.line(),
                    content: NodeContent::Scalar { tag, value },
                };
                self.push_node(node, anchor);
            }
            Event::SequenceStart(anchor) => {
                self.stack.push(Frame::Sequence {
                    line: marker.line(),
                    anchor,
                    items: Vec::new(),
                });
            }
            Event::SequenceEnd => {
                if let Some(Frame::Sequence {
                    line,
                    anchor,
                    items,
                }) = self.stack.pop()
                {
                    let node = Node {
                        line,
                        content: NodeContent::Sequence(items),
                    };
                    self.push_node(node, anchor);
                }
            }
            Event::MappingStart(anchor) => {
                self.stack.push(Frame::Mapping {
                    line: marker.line(),
                    anchor,
                    entries: Vec::new(),
                    pending_key: None,
                });
            }
            Event::MappingEnd => {
                if let Some(Frame::Mapping {
                    line,
                    anchor,
                    entries,
                    ..
                }) = self.stack.pop()
                {
                    let node = Node {
                        line,
                        content: NodeContent::Mapping(entries),
                    };
                    self.push_node(node, anchor);
                }
            }
            Event::Alias(id) => {
                // An alias reuses the anchored node, keeping the anchor's
                // source line. Unknown aliases degrade to null.
                let node = self.anchors.get(&id).cloned().unwrap_or_else(|| Node {
                    line: marker.line(),
                    content: NodeContent::Scalar {
                        tag: ScalarTag::Null,
                        value: "~".to_string(),
                    },
                });
                self.push_node(node, 0);
            }
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}
        }
    }
}

fn resolve_scalar_tag(value: &str, style: TScalarStyle, token: Option<&TokenType>) -> ScalarTag {
    // Quoted and block scalars are always strings.
    if style != TScalarStyle::Plain {
        return ScalarTag::Str;
    }
    if let Some(TokenType::Tag(handle, suffix)) = token {
        if handle == "!!" {
            return match suffix.as_str() {
                "null" => ScalarTag::Null,
                "bool" => ScalarTag::Bool,
                "int" => ScalarTag::Int,
                "float" => ScalarTag::Float,
                _ => ScalarTag::Str,
            };
        }
        return ScalarTag::Str;
    }
    match value {
        "~" | "null" => ScalarTag::Null,
        "true" | "false" => ScalarTag::Bool,
        _ if value.parse::<i64>().is_ok() => ScalarTag::Int,
        _ if is_float_literal(value) => ScalarTag::Float,
        _ => ScalarTag::Str,
    }
}

fn is_float_literal(value: &str) -> bool {
    match value {
        ".inf" | "+.inf" | "-.inf" | ".Inf" | "+.Inf" | "-.Inf" | ".nan" | ".NaN" => true,
        // Require a digit so words like "inf" and "nan" stay strings.
        _ => value.bytes().any(|b| b.is_ascii_digit()) && value.parse::<f64>().is_ok(),
    }
}
