//! Front-matter parsing

use std::collections::HashMap;

/// Delimiter that opens and closes a front-matter block
const DELIMITER: &str = "---";

/// Raw front-matter fields of a post
///
/// Values are kept as the author wrote them (minus surrounding quotes);
/// interpreting them is left to [`super::metadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: HashMap<String, String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, trimmed_body)
    ///
    /// A block is only recognized when the text starts with `---` and a
    /// second `---` follows. Anything else is treated as body text with
    /// no metadata.
    pub fn parse(content: &str) -> (Self, &str) {
        if !content.starts_with(DELIMITER) {
            return (FrontMatter::default(), content.trim());
        }

        let mut parts = content.splitn(3, DELIMITER);
        let (block, body) = match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(block), Some(body)) => (block, body),
            _ => return (FrontMatter::default(), content.trim()),
        };

        (Self::parse_block(block), body.trim())
    }

    fn parse_block(block: &str) -> Self {
        let mut fields = HashMap::new();

        for line in block.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            // Key must be non-empty: a leading colon is not a field
            match line.find(':') {
                Some(colon) if colon > 0 => {
                    let key = line[..colon].trim();
                    let value = line[colon + 1..].trim().trim_matches('"');
                    fields.insert(key.to_string(), value.to_string());
                }
                _ => {}
            }
        }

        Self { fields }
    }

    /// Raw value of a field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Whether the document declared no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over all fields, including ones the normalizer ignores
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
