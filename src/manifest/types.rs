use thiserror::Error;
use yaml_rust::scanner::ScanError;

/// A node of the parsed manifest tree. Every node remembers the 1-based
/// source line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub line: usize,
    pub content: NodeContent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    Scalar { tag: ScalarTag, value: String },
    /// Ordered key/value pairs. Duplicate keys are kept as parsed.
    Mapping(Vec<(Node, Node)>),
    Sequence(Vec<Node>),
}

/// Resolved scalar type, following the yaml-rust plain-scalar rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarTag {
    Null,
    Bool,
    Int,
    Float,
    Str,
}

impl Node {
    pub fn is_mapping(&self) -> bool {
        matches!(self.content, NodeContent::Mapping(_))
    }

    /// Looks up `key` among this mapping's pairs. The first pair whose key
    /// scalar has exactly the text `key` wins; later duplicates are ignored.
    /// Returns `None` when the node is not a mapping or no pair matches.
    pub fn field(&self, key: &str) -> Option<&Node> {
        let pairs = self.pairs()?;
        pairs.iter().find_map(|(k, v)| match &k.content {
            NodeContent::Scalar { value, .. } if value == key => Some(v),
            _ => None,
        })
    }

    pub fn pairs(&self) -> Option<&[(Node, Node)]> {
        match &self.content {
            NodeContent::Mapping(pairs) => Some(pairs),
            _ => None,
        }
    }

    pub fn items(&self) -> Option<&[Node]> {
        match &self.content {
            NodeContent::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// The scalar text, only for string-tagged scalars.
    pub fn as_str(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Scalar {
                tag: ScalarTag::Str,
                value,
            } => Some(value),
            _ => None,
        }
    }

    /// Interprets the node as an integer. A native integer scalar parses
    /// as base 10; a string scalar parses only if the whole trimmed text
    /// is an integer literal. Anything else is not an integer. The source
    /// position is always available on `self.line`.
    pub fn as_int(&self) -> Option<i64> {
        match &self.content {
            NodeContent::Scalar {
                tag: ScalarTag::Int,
                value,
            } => value.parse().ok(),
            NodeContent::Scalar {
                tag: ScalarTag::Str,
                value,
            } => value.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Failures that abort the run before any schema validation happens.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("cannot read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("cannot unmarshal file content: {0}")]
    Parse(#[from] ScanError),
    #[error("cannot unmarshal file content: empty document")]
    EmptyDocument,
    #[error("cannot serialize diagnostics: {0}")]
    Json(#[from] serde_json::Error),
}
