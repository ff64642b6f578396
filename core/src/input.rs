use std::collections::HashMap;

use anyhow::{anyhow, Result};

/// Field names an entry form accepts as `key:value` words.
pub const ENTRY_FIELDS: [&str; 5] = ["from", "to", "classroom", "autonomous", "days"];

/// Free-form entry input split into a title and its `key:value` fields.
#[derive(Debug, PartialEq)]
pub struct EntryInput {
    pub title: String,
    pub fields: HashMap<String, String>,
}

/// Split trailing CLI words: `key:value` words become fields, everything
/// else joins the title in order.
pub fn parse_entry_args(args: &[String]) -> EntryInput {
    let mut title_parts = Vec::new();
    let mut fields = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() {
                fields.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        title_parts.push(arg.as_str());
    }

    EntryInput {
        title: title_parts.join(" "),
        fields,
    }
}

/// Expand an abbreviated field key against `ENTRY_FIELDS`.
pub fn expand_field(key: &str) -> Result<&'static str> {
    // 1. Exact match
    if let Some(&field) = ENTRY_FIELDS.iter().find(|&&f| f == key) {
        return Ok(field);
    }

    // 2. Prefix match
    let matches: Vec<&'static str> = ENTRY_FIELDS
        .iter()
        .filter(|&&f| f.starts_with(key))
        .copied()
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(anyhow!("Unknown field: '{}'", key)),
        _ => Err(anyhow!("Ambiguous field: '{}' matches {:?}", key, matches)),
    }
}

/// Numeric coercion for hour/day fields: malformed text reads as 0, never
/// an error.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_title_and_fields() {
        let args = vec![
            "Summer".to_string(),
            "school".to_string(),
            "from:2026-07-06".to_string(),
            "classroom:12".to_string(),
        ];
        let parsed = parse_entry_args(&args);
        assert_eq!(parsed.title, "Summer school");
        assert_eq!(parsed.fields.get("from"), Some(&"2026-07-06".to_string()));
        assert_eq!(parsed.fields.get("classroom"), Some(&"12".to_string()));
    }

    #[test]
    fn test_expand_field() {
        assert_eq!(expand_field("f").unwrap(), "from");
        assert_eq!(expand_field("t").unwrap(), "to");
        assert_eq!(expand_field("c").unwrap(), "classroom");
        assert_eq!(expand_field("a").unwrap(), "autonomous");
        assert_eq!(expand_field("d").unwrap(), "days");
        assert_eq!(expand_field("days").unwrap(), "days");

        // Unknown
        assert!(expand_field("x").is_err());
        assert!(expand_field("hours").is_err());
    }

    #[test]
    fn test_coerce_number_swallows_garbage() {
        assert_eq!(coerce_number("12"), 12.0);
        assert_eq!(coerce_number(" 2.5 "), 2.5);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number(""), 0.0);
        // Negative numbers pass through; the form never rejects them.
        assert_eq!(coerce_number("-3"), -3.0);
    }
}
