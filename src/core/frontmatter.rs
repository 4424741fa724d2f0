use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

lazy_static! {
    // Leading `---` line, optional YAML, closing `---` line. The lazy `??` keeps
    // an empty block (`---\n---`) from swallowing a later delimiter in the body.
    static ref FRONTMATTER_RE: Regex =
        Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)??---[ \t]*(?:\r?\n|\z)").unwrap();
}

/// Metadata block at the top of a markdown file.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter {
    pub fields: BTreeMap<String, Value>,
}

impl Frontmatter {
    /// Separate the frontmatter block from the body.
    ///
    /// Returns `Ok(None)` when the file has no block at all and `Err` when the
    /// block exists but is not a string-keyed YAML mapping.
    pub fn try_split(raw: &str) -> Result<Option<(Self, &str)>, serde_yaml::Error> {
        let Some(caps) = FRONTMATTER_RE.captures(raw) else {
            return Ok(None);
        };
        let body = &raw[caps.get(0).map_or(0, |m| m.end())..];
        let yaml = caps.get(1).map_or("", |m| m.as_str());

        if yaml.trim().is_empty() {
            return Ok(Some((Self::default(), body)));
        }

        let fields: Option<BTreeMap<String, Value>> = serde_yaml::from_str(yaml)?;
        Ok(Some((
            Self {
                fields: fields.unwrap_or_default(),
            },
            body,
        )))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Explicit `title` override, if set to something displayable.
    pub fn title(&self) -> Option<String> {
        match self.get("title")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(raw: &str) -> (Frontmatter, &str) {
        Frontmatter::try_split(raw).unwrap().unwrap()
    }

    #[test]
    fn test_split_extracts_fields_and_body() {
        let raw = "---\ntitle: \"B Title\"\ntags: [a, b]\n---\n# Body\ntext";
        let (fm, body) = parsed(raw);
        assert_eq!(fm.title().as_deref(), Some("B Title"));
        assert_eq!(fm.get("tags"), Some(&serde_json::json!(["a", "b"])));
        assert_eq!(body, "# Body\ntext");
    }

    #[test]
    fn test_no_block_is_none() {
        let raw = "# Just a heading\n---\nnot frontmatter";
        assert!(Frontmatter::try_split(raw).unwrap().is_none());
    }

    #[test]
    fn test_empty_block_does_not_reach_later_delimiter() {
        let (fm, body) = parsed("---\n---\nbody\n---\nmore");
        assert!(fm.is_empty());
        assert_eq!(body, "body\n---\nmore");
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        assert!(Frontmatter::try_split("---\ntitle: [unclosed\n---\nbody").is_err());
    }

    #[test]
    fn test_scalar_yaml_is_error() {
        assert!(Frontmatter::try_split("---\njust some words\n---\nbody").is_err());
    }

    #[test]
    fn test_crlf_delimiters() {
        let (fm, body) = parsed("---\r\ntitle: Windows\r\n---\r\nbody");
        assert_eq!(fm.title().as_deref(), Some("Windows"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_title_ignores_empty_and_structured_values() {
        assert_eq!(parsed("---\ntitle: \"\"\n---\n").0.title(), None);
        assert_eq!(parsed("---\ntitle: [x]\n---\n").0.title(), None);
        assert_eq!(parsed("---\ntitle: 2024\n---\n").0.title().as_deref(), Some("2024"));
    }
}
