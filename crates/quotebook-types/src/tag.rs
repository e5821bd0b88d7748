/// Trim and lowercase a raw tag. Blank input yields `None`.
pub fn normalize_tag(input: &str) -> Option<String> {
    let tag = input.trim().to_lowercase();
    if tag.is_empty() { None } else { Some(tag) }
}

/// Append `input` to `tags` unless it is blank or already present after
/// normalization. Returns the stored tag when something was added.
pub fn push_unique_tag(tags: &mut Vec<String>, input: &str) -> Option<String> {
    let tag = normalize_tag(input)?;
    if tags.contains(&tag) {
        return None;
    }
    tags.push(tag.clone());
    Some(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag("  Философия "), Some("философия".to_string()));
        assert_eq!(normalize_tag("   "), None);
    }

    #[test]
    fn test_push_unique_tag_dedupes_case_insensitively() {
        let mut tags = vec!["philosophy".to_string()];

        assert_eq!(push_unique_tag(&mut tags, "Philosophy"), None);
        assert_eq!(tags, vec!["philosophy"]);

        assert_eq!(push_unique_tag(&mut tags, " Ethics"), Some("ethics".to_string()));
        assert_eq!(tags, vec!["philosophy", "ethics"]);
    }

    #[test]
    fn test_push_unique_tag_ignores_blank() {
        let mut tags = Vec::new();
        assert_eq!(push_unique_tag(&mut tags, "  "), None);
        assert!(tags.is_empty());
    }
}
