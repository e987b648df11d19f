use crate::manifest::report::Reporter;
use crate::manifest::types::Node;

pub fn validate_metadata(meta: &Node, rep: &mut Reporter) {
    match meta.field("name") {
        None => rep.add_required("metadata.name"),
        Some(node) => match node.as_str() {
            None => rep.add(node.line, "name must be string"),
            // The node exists, so unlike a structurally absent field this
            // diagnostic is anchored to a real line.
            Some(value) if value.trim().is_empty() => rep.add(node.line, "name is required"),
            Some(_) => {}
        },
    }

    if let Some(node) = meta.field("namespace") {
        if node.as_str().is_none() {
            rep.add(node.line, "namespace must be string");
        }
    }

    if let Some(labels) = meta.field("labels") {
        match labels.pairs() {
            None => rep.add(labels.line, "labels must be object"),
            Some(pairs) => {
                for (key, value) in pairs {
                    if value.as_str().is_none() {
                        rep.add(value.line, "labels value must be string");
                    }
                    if key.as_str().is_none() {
                        rep.add(key.line, "labels key must be string");
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parsing;

    fn lint(input: &str) -> Vec<String> {
        let mut documents = parsing::load_documents(input).expect("valid yaml");
        let mut rep = Reporter::new("test.yml");
        validate_metadata(&documents.remove(0), &mut rep);
        rep.diagnostics().iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn valid_metadata_has_no_diagnostics() {
        let input = "\
name: payments
namespace: prod
labels:
  app: payments
  tier: backend
";
        assert!(lint(input).is_empty());
    }

    #[test]
    fn missing_name_has_no_line() {
        assert_eq!(
            lint("namespace: prod\n"),
            vec!["test.yml: metadata.name is required"]
        );
    }

    #[test]
    fn empty_name_is_required_at_its_line() {
        assert_eq!(lint("name: \"\"\n"), vec!["test.yml:1 name is required"]);
        assert_eq!(lint("name: \"   \"\n"), vec!["test.yml:1 name is required"]);
    }

    #[test]
    fn non_string_name() {
        assert_eq!(lint("name: 42\n"), vec!["test.yml:1 name must be string"]);
        assert_eq!(lint("name:\n"), vec!["test.yml:1 name must be string"]);
    }

    #[test]
    fn namespace_must_be_string_when_present() {
        let input = "\
name: app
namespace: 7
";
        assert_eq!(lint(input), vec!["test.yml:2 namespace must be string"]);
    }

    #[test]
    fn labels_must_be_a_mapping() {
        let input = "\
name: app
labels:
  - a
";
        assert_eq!(lint(input), vec!["test.yml:3 labels must be object"]);
    }

    #[test]
    fn label_pairs_are_checked_value_first() {
        let input = "\
name: app
labels:
  1: 2
  app: payments
";
        assert_eq!(
            lint(input),
            vec![
                "test.yml:3 labels value must be string",
                "test.yml:3 labels key must be string",
            ]
        );
    }
}
