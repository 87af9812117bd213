//! Front-matter parsing

use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use super::ContentError;

/// Front-matter of an article file.
///
/// Values are kept as written; readers coerce the keys they care about.
#[derive(Debug, Clone, Default)]
pub struct FrontMatter {
    metadata: Mapping,
}

impl FrontMatter {
    /// Look up a metadata key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }

    /// Read a file and split it into front-matter and body
    pub fn load(path: &Path) -> Result<(Self, String), ContentError> {
        if !path.is_file() {
            return Err(ContentError::NotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (fm, body) = Self::parse(&content).map_err(|source| ContentError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

        Ok((fm, body.to_string()))
    }

    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let content = content.trim_start_matches('\u{feff}');
        let trimmed = content.trim_start();

        let Some(rest) = opening_delimiter(trimmed) else {
            return Ok((FrontMatter::default(), content.trim_end()));
        };

        // Find the closing --- on a line of its own
        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if line.trim_end() == "---" {
                let yaml_content = &rest[..offset];
                let remaining = rest[offset + line.len()..]
                    .trim_start_matches(['\n', '\r'])
                    .trim_end();

                if yaml_content.trim().is_empty() {
                    return Ok((FrontMatter::default(), remaining));
                }

                let metadata = match serde_yaml::from_str::<Value>(yaml_content)? {
                    Value::Mapping(metadata) => metadata,
                    Value::Null => Mapping::new(),
                    other => {
                        tracing::debug!("Front-matter is not a mapping, ignoring: {:?}", other);
                        Mapping::new()
                    }
                };
                return Ok((FrontMatter { metadata }, remaining));
            }
            offset += line.len();
        }

        tracing::debug!("Front-matter block is not closed, treating file as body");
        Ok((FrontMatter::default(), content.trim_end()))
    }
}

/// Returns the text after an opening `---` line, if the document starts with one
fn opening_delimiter(content: &str) -> Option<&str> {
    let first_line_end = content.find('\n').unwrap_or(content.len());
    if content[..first_line_end].trim_end() != "---" {
        return None;
    }
    Some(content.get(first_line_end + 1..).unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Hello World
subtitle: A first post
created: 2024-01-15
tags:
  - rust
  - web
---

<p>This is the content.</p>
"#;

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get("title").and_then(Value::as_str), Some("Hello World"));
        assert_eq!(fm.get("subtitle").and_then(Value::as_str), Some("A first post"));
        assert_eq!(fm.get("created").and_then(Value::as_str), Some("2024-01-15"));
        assert_eq!(
            fm.get("tags"),
            Some(&Value::Sequence(vec![Value::from("rust"), Value::from("web")]))
        );
        assert_eq!(remaining, "<p>This is the content.</p>");
    }

    #[test]
    fn test_parse_string_tags() {
        let content = "---\ntitle: Tagged\ntags: a, b\n---\n<p>Hi</p>";

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get("tags").and_then(Value::as_str), Some("a, b"));
        assert_eq!(remaining, "<p>Hi</p>");
    }

    #[test]
    fn test_missing_fields_are_none() {
        let content = "---\ntitle: Only a title\n---\nbody";

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get("subtitle"), None);
        assert_eq!(fm.get("created"), None);
        assert_eq!(fm.get("tags"), None);
    }

    #[test]
    fn test_values_are_not_validated() {
        let content = "---\ntitle: [a, b]\ncreated: 2024\nauthor: {name: someone}\n---\nbody";

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.get("title").unwrap().is_sequence());
        assert!(fm.get("created").unwrap().is_number());
        assert!(fm.get("author").unwrap().is_mapping());
        assert_eq!(remaining, "body");
    }

    #[test]
    fn test_sequence_header_is_ignored() {
        let content = "---\n- a\n- b\n---\n<p>body</p>";

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(remaining, "<p>body</p>");
    }

    #[test]
    fn test_scalar_header_is_ignored() {
        let (fm, remaining) = FrontMatter::parse("---\njust words\n---\nbody").unwrap();
        assert!(fm.is_empty());
        assert_eq!(remaining, "body");
    }

    #[test]
    fn test_body_trailing_whitespace_trimmed() {
        let content = "---\ntitle: Hi\n---\n<p>Hi</p>\n\n\n";

        let (_, remaining) = FrontMatter::parse(content).unwrap();
        assert_eq!(remaining, "<p>Hi</p>");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "<p>Just HTML</p>\n";

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(remaining, "<p>Just HTML</p>");
    }

    #[test]
    fn test_unclosed_frontmatter_is_body() {
        let content = "---\ntitle: never closed\n<p>body</p>";

        let (fm, remaining) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(remaining, content);
    }

    #[test]
    fn test_empty_frontmatter() {
        let (fm, remaining) = FrontMatter::parse("---\n---\n<p>x</p>").unwrap();
        assert!(fm.is_empty());
        assert_eq!(remaining, "<p>x</p>");
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let content = "---\ntitle: [unclosed\n---\nbody";
        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FrontMatter::load(&dir.path().join("nope.html")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = FrontMatter::load(dir.path()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.html");
        fs::write(&path, "\u{feff}---\ntitle: Loaded\n---\n<p>ok</p>\n").unwrap();

        let (fm, body) = FrontMatter::load(&path).unwrap();
        assert_eq!(fm.get("title").and_then(Value::as_str), Some("Loaded"));
        assert_eq!(body, "<p>ok</p>");
    }
}
