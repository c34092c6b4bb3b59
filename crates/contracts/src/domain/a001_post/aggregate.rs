use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Blog post as returned by `GET /posts/` and `GET /posts/{slug}/`.
///
/// The backend is not owned by this project, so every field beyond `title`
/// and `slug` tolerates being absent. Older payloads use camelCase keys for
/// the publication date and reading time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default, alias = "publishedAt")]
    pub published_at: Option<String>,
    #[serde(default, alias = "readingTime")]
    pub reading_time: Option<u32>,
}

impl Post {
    /// Reading time shown when the backend does not provide one.
    pub const DEFAULT_READING_TIME: u32 = 5;

    /// Media reference that best describes the cover image.
    ///
    /// An absolute `cover_image_url` wins, then the raw `cover_image` path,
    /// then whatever `cover_image_url` holds. Empty strings count as absent.
    pub fn image_reference(&self) -> Option<&str> {
        let url = non_empty(self.cover_image_url.as_deref());
        let path = non_empty(self.cover_image.as_deref());

        match (url, path) {
            (Some(url), _) if url.starts_with("http") => Some(url),
            (_, Some(path)) => Some(path),
            (url, None) => url,
        }
    }

    pub fn reading_time_minutes(&self) -> u32 {
        self.reading_time.unwrap_or(Self::DEFAULT_READING_TIME)
    }

    /// Publication timestamp, if present and RFC 3339.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        let raw = self.published_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Listing filter: case-insensitive search over title and content plus an
    /// optional exact tag match.
    pub fn matches(&self, query: &str, tag: Option<&str>) -> bool {
        let query = query.trim().to_lowercase();
        let matches_search = query.is_empty()
            || self.title.to_lowercase().contains(&query)
            || self.content.to_lowercase().contains(&query);
        let matches_tag = tag.map_or(true, |t| self.tags.iter().any(|own| own == t));

        matches_search && matches_tag
    }
}

/// Unique tags across `posts`, in first-seen order.
pub fn collect_tags(posts: &[Post]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in posts.iter().flat_map(|p| p.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, content: &str, tags: &[&str]) -> Post {
        Post {
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Post::default()
        }
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let p: Post = serde_json::from_str(r#"{"title":"Hello","slug":"hello"}"#).unwrap();
        assert_eq!(p.slug, "hello");
        assert!(p.tags.is_empty());
        assert_eq!(p.reading_time_minutes(), 5);
        assert_eq!(p.image_reference(), None);
    }

    #[test]
    fn test_deserialize_camel_case_aliases() {
        let p: Post = serde_json::from_str(
            r#"{"id":2,"title":"T","slug":"t","publishedAt":"2025-04-12T12:00:00Z","readingTime":7}"#,
        )
        .unwrap();
        assert_eq!(p.reading_time_minutes(), 7);
        assert_eq!(
            p.published().map(|d| d.to_rfc3339()),
            Some("2025-04-12T12:00:00+00:00".to_string())
        );
    }

    #[test]
    fn test_image_reference_precedence() {
        let mut p = post("T", "", &[]);
        p.cover_image = Some("posts/a.jpg".into());
        p.cover_image_url = Some("https://cdn.test/a.jpg".into());
        assert_eq!(p.image_reference(), Some("https://cdn.test/a.jpg"));

        p.cover_image_url = Some("/media/posts/a.jpg".into());
        assert_eq!(p.image_reference(), Some("posts/a.jpg"));

        p.cover_image = Some(String::new());
        assert_eq!(p.image_reference(), Some("/media/posts/a.jpg"));
    }

    #[test]
    fn test_matches_search_and_tag() {
        let p = post("Intro to Rust", "Ownership and borrowing", &["rust", "tutorial"]);
        assert!(p.matches("", None));
        assert!(p.matches("RUST", None));
        assert!(p.matches("borrow", Some("rust")));
        assert!(!p.matches("python", None));
        assert!(!p.matches("", Some("python")));
    }

    #[test]
    fn test_collect_tags_keeps_first_seen_order() {
        let posts = vec![
            post("A", "", &["react", "js"]),
            post("B", "", &["django", "js"]),
        ];
        assert_eq!(collect_tags(&posts), vec!["react", "js", "django"]);
    }
}
