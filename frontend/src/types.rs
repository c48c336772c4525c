//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Result Types** - Moderation verdict and per-category confidence
//! - **Catalog Types** - Category descriptions served by the API
//! - **Error Types** - Frontend error handling

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::marker::PhantomData;

// =============================================================================
// Ordered Map
// =============================================================================

/// A JSON object decoded into its entries, in payload order.
///
/// The service decides the order categories are listed in, so entries are
/// kept exactly as received instead of going through a hash map.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

// =============================================================================
// Result Types
// =============================================================================

/// Category name to confidence in `[0, 1]`, in payload order.
pub type CategoryScores = OrderedMap<f64>;

/// The service's verdict for one image.
///
/// Decodes either the `categories` object or the `scores` list form of the
/// response. `categories` wins when both are present.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawModerationResult")]
pub struct ModerationResult {
    pub is_safe: bool,
    pub categories: CategoryScores,
    /// Original filename, when echoed back by the service.
    pub filename: Option<String>,
    /// MIME type, when echoed back by the service.
    pub content_type: Option<String>,
}

impl ModerationResult {
    pub fn new(is_safe: bool, categories: CategoryScores) -> Self {
        Self {
            is_safe,
            categories,
            filename: None,
            content_type: None,
        }
    }
}

/// Single entry of the list-shaped `scores` field.
#[derive(Clone, Debug, Deserialize)]
struct CategoryScore {
    category: String,
    confidence: f64,
}

#[derive(Deserialize)]
struct RawModerationResult {
    is_safe: bool,
    #[serde(default)]
    categories: Option<CategoryScores>,
    #[serde(default)]
    scores: Option<Vec<CategoryScore>>,
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    content_type: Option<String>,
}

impl TryFrom<RawModerationResult> for ModerationResult {
    type Error = String;

    fn try_from(raw: RawModerationResult) -> Result<Self, Self::Error> {
        let categories = match (raw.categories, raw.scores) {
            (Some(categories), _) => categories,
            (None, Some(scores)) => scores
                .into_iter()
                .map(|s| (s.category, s.confidence))
                .collect(),
            (None, None) => return Err("missing field `categories`".to_string()),
        };

        Ok(Self {
            is_safe: raw.is_safe,
            categories,
            filename: raw.filename,
            content_type: raw.content_type,
        })
    }
}

// =============================================================================
// Catalog Types
// =============================================================================

/// Description of one detectable category.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// "high", "medium", ...
    #[serde(default)]
    pub severity: String,
}

impl CategoryInfo {
    /// Get CSS class for the severity badge.
    pub fn severity_class(&self) -> &'static str {
        match self.severity.as_str() {
            "high" => "severity-high",
            "medium" => "severity-medium",
            "low" => "severity-low",
            _ => "severity-unknown",
        }
    }
}

/// Response of `GET /moderate/categories`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CategoryCatalog {
    pub categories: OrderedMap<CategoryInfo>,
    #[serde(default)]
    pub confidence_threshold: Option<f64>,
    #[serde(default)]
    pub supported_formats: Vec<String>,
    #[serde(default)]
    pub max_file_size: Option<String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors outside the moderation request itself.
///
/// Request failures have their own type, [`crate::ModerationError`].
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Durable storage unavailable or write rejected.
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_keep_payload_order() {
        let json = r#"{
            "is_safe": false,
            "categories": {"violence": 0.91, "adult_content": 0.12, "hate_symbols": 0.5}
        }"#;

        let result: ModerationResult = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = result.categories.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["violence", "adult_content", "hate_symbols"]);
        assert!(!result.is_safe);
        assert_eq!(result.categories.get("hate_symbols"), Some(&0.5));
        assert_eq!(result.filename, None);
    }

    #[test]
    fn test_scores_list_shape() {
        let json = r#"{
            "is_safe": true,
            "scores": [
                {"category": "self_harm", "confidence": 0.02},
                {"category": "explicit_nudity", "confidence": 0.1}
            ],
            "filename": "cat.png",
            "content_type": "image/png"
        }"#;

        let result: ModerationResult = serde_json::from_str(json).unwrap();
        let expected: CategoryScores = [("self_harm", 0.02), ("explicit_nudity", 0.1)]
            .into_iter()
            .collect();
        assert!(result.is_safe);
        assert_eq!(result.categories, expected);
        assert_eq!(result.filename.as_deref(), Some("cat.png"));
        assert_eq!(result.content_type.as_deref(), Some("image/png"));
    }

    #[test]
    fn test_categories_win_over_scores() {
        let json = r#"{
            "is_safe": true,
            "categories": {"violence": 0.3},
            "scores": [{"category": "spam_unwanted", "confidence": 0.9}]
        }"#;

        let result: ModerationResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.categories.len(), 1);
        assert_eq!(result.categories.get("violence"), Some(&0.3));
    }

    #[test]
    fn test_missing_scores_is_rejected() {
        let err = serde_json::from_str::<ModerationResult>(r#"{"is_safe": true}"#).unwrap_err();
        assert!(err.to_string().contains("categories"));

        assert!(serde_json::from_str::<ModerationResult>(r#"{"categories": {}}"#).is_err());
    }

    #[test]
    fn test_catalog_deserialization() {
        let json = r#"{
            "categories": {
                "explicit_nudity": {
                    "name": "Explicit Nudity",
                    "description": "Sexually explicit content and nudity",
                    "severity": "high"
                },
                "spam_unwanted": {
                    "name": "Spam/Unwanted",
                    "description": "Spam, advertisements, or unwanted content",
                    "severity": "medium"
                }
            },
            "confidence_threshold": 0.7,
            "supported_formats": ["jpg", "jpeg", "png", "gif", "webp"],
            "max_file_size": "10MB"
        }"#;

        let catalog: CategoryCatalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.categories.len(), 2);
        let (key, first) = catalog.categories.iter().next().unwrap();
        assert_eq!(key, "explicit_nudity");
        assert_eq!(first.severity_class(), "severity-high");
        assert_eq!(catalog.confidence_threshold, Some(0.7));
        assert_eq!(catalog.supported_formats.len(), 5);
        assert_eq!(catalog.max_file_size.as_deref(), Some("10MB"));
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }
}
