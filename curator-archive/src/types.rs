//! Wire types for the search and metadata endpoints.

use std::fmt;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub response: SearchBody,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub docs: Vec<DocRef>,
    #[serde(rename = "numFound")]
    pub num_found: u64,
}

#[derive(Debug, Deserialize)]
pub struct DocRef {
    pub identifier: String,
}

#[derive(Debug, Deserialize)]
pub struct MetadataResponse {
    pub files: Vec<ItemFile>,
}

/// One file within an item's metadata listing.
#[derive(Debug, Deserialize)]
pub struct ItemFile {
    pub name: String,
    #[serde(default)]
    pub size: Option<SizeField>,
}

/// File size as reported by the metadata API — sometimes a number,
/// sometimes a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SizeField {
    Number(u64),
    Text(String),
}

impl fmt::Display for SizeField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SizeField::Number(n) => write!(f, "{n}"),
            SizeField::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_field_accepts_number_or_string() {
        let file: ItemFile = serde_json::from_str(r#"{"name": "a.avi", "size": 100}"#).unwrap();
        assert_eq!(file.size.unwrap().to_string(), "100");

        let file: ItemFile = serde_json::from_str(r#"{"name": "a.avi", "size": "100"}"#).unwrap();
        assert_eq!(file.size.unwrap().to_string(), "100");
    }

    #[test]
    fn test_size_field_may_be_absent() {
        let file: ItemFile = serde_json::from_str(r#"{"name": "a.avi"}"#).unwrap();
        assert!(file.size.is_none());
    }

    #[test]
    fn test_search_response_shape() {
        let json = r#"{"response": {"docs": [{"identifier": "item-1"}], "numFound": 75}}"#;
        let parsed: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.response.num_found, 75);
        assert_eq!(parsed.response.docs[0].identifier, "item-1");
    }
}
