//! Text formatting for moderation results.

use crate::ModerationResult;

/// Human label for the safety verdict.
pub fn safety_label(is_safe: bool) -> &'static str {
    if is_safe {
        "Yes"
    } else {
        "No"
    }
}

/// Category key as displayed: `adult_content` -> `adult content`.
pub fn category_label(category: &str) -> String {
    category.replace('_', " ")
}

/// Confidence in `[0, 1]` as a percentage with two decimals.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// One line per category, in payload order: `violence: 1.00%`.
pub fn category_lines(result: &ModerationResult) -> Vec<String> {
    result
        .categories
        .iter()
        .map(|(category, confidence)| {
            format!("{}: {}", category_label(category), format_confidence(*confidence))
        })
        .collect()
}

/// Caption built from the echoed filename and MIME type, if any.
pub fn result_caption(result: &ModerationResult) -> Option<String> {
    match (result.filename.as_deref(), result.content_type.as_deref()) {
        (Some(name), Some(mime)) => Some(format!("{} ({})", name, mime)),
        (Some(name), None) => Some(name.to_string()),
        (None, Some(mime)) => Some(mime.to_string()),
        (None, None) => None,
    }
}

/// Byte count as B / KB / MB with one decimal.
pub fn format_file_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let size = bytes as f64;
    if size < KB {
        format!("{} B", bytes)
    } else if size < MB {
        format!("{:.1} KB", size / KB)
    } else {
        format!("{:.1} MB", size / MB)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ModerationResult {
        serde_json::from_str(
            r#"{"is_safe": true, "categories": {"violence": 0.01, "adult_content": 0.42}}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_renders_verdict_and_lines_in_order() {
        let result = sample();
        assert_eq!(safety_label(result.is_safe), "Yes");
        assert_eq!(
            category_lines(&result),
            vec!["violence: 1.00%".to_string(), "adult content: 42.00%".to_string()]
        );
    }

    #[test]
    fn test_unsafe_label() {
        assert_eq!(safety_label(false), "No");
    }

    #[test]
    fn test_every_underscore_becomes_space() {
        assert_eq!(category_label("graphic_violence_extreme"), "graphic violence extreme");
        assert_eq!(category_label("spam"), "spam");
    }

    #[test]
    fn test_confidence_bounds() {
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.98766), "98.77%");
    }

    #[test]
    fn test_caption() {
        let mut result = sample();
        assert_eq!(result_caption(&result), None);

        result.filename = Some("cat.png".to_string());
        assert_eq!(result_caption(&result).as_deref(), Some("cat.png"));

        result.content_type = Some("image/png".to_string());
        assert_eq!(result_caption(&result).as_deref(), Some("cat.png (image/png)"));
    }

    #[test]
    fn test_file_size() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
    }
}
