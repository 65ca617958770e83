use anyhow::{anyhow, Result};

/// One parsed add/edit command: free text plus `key:value` metadata tokens.
/// Metadata keeps its input order so that later tokens can override earlier
/// ones.
#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub description: String,
    pub metadata: Vec<(String, String)>,
}

pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut text_parts = Vec::new();
    let mut metadata = Vec::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                metadata.push((key.to_string(), value.to_string()));
                continue;
            }
        }
        text_parts.push(arg.as_str());
    }

    ParsedInput {
        description: text_parts.join(" "),
        metadata,
    }
}

/// Expands a possibly abbreviated key against the known key set.
pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    // 1. Exact match
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    // 2. Prefix match
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(anyhow!("Unknown key: '{}'", key)),
        _ => Err(anyhow!("Ambiguous key: '{}' matches {:?}", key, matches)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let args = vec![
            "Water".to_string(),
            "the".to_string(),
            "plants".to_string(),
            "due:tomorrow".to_string(),
            "color:green".to_string(),
        ];
        let parsed = parse_args(&args);
        assert_eq!(parsed.description, "Water the plants");
        assert_eq!(
            parsed.metadata,
            vec![
                ("due".to_string(), "tomorrow".to_string()),
                ("color".to_string(), "green".to_string()),
            ]
        );
    }

    #[test]
    fn test_metadata_keeps_input_order() {
        let args = vec!["Gym".to_string(), "due:fri".to_string(), "repeat:tu".to_string()];
        let parsed = parse_args(&args);
        assert_eq!(parsed.metadata[0].0, "due");
        assert_eq!(parsed.metadata[1].0, "repeat");
    }

    #[test]
    fn test_bare_colon_token_is_text() {
        let args = vec![":warning".to_string(), "sign".to_string()];
        let parsed = parse_args(&args);
        assert_eq!(parsed.description, ":warning sign");
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn test_expand_key() {
        let candidates = ["due", "repeat", "color"];

        assert_eq!(expand_key("d", &candidates).unwrap(), "due");
        assert_eq!(expand_key("du", &candidates).unwrap(), "due");
        assert_eq!(expand_key("due", &candidates).unwrap(), "due");

        assert_eq!(expand_key("r", &candidates).unwrap(), "repeat");
        assert_eq!(expand_key("c", &candidates).unwrap(), "color");

        // Unknown
        assert!(expand_key("x", &candidates).is_err());
        assert!(expand_key("dued", &candidates).is_err());
    }
}
