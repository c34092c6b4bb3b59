use crate::shared::validation::{collect_errors, FieldRules, ValidationError};
use serde::{Deserialize, Serialize};

use super::aggregate::Post;

pub const EXCERPT_MAX_CHARS: usize = 200;
pub const CONTENT_MIN_CHARS: usize = 50;
pub const COVER_IMAGE_MAX_BYTES: usize = 5_000_000;
pub const COVER_IMAGE_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

const TITLE_RULES: FieldRules = FieldRules::required();
const EXCERPT_RULES: FieldRules = FieldRules::required().max_length(EXCERPT_MAX_CHARS);
const CONTENT_RULES: FieldRules = FieldRules::required().min_length(CONTENT_MIN_CHARS);

// ============================================================================
// Form
// ============================================================================

/// Editable fields of a post, as typed into the create/edit form.
///
/// `tags` is the raw comma-separated input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostForm {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub tags: String,
}

impl PostForm {
    /// Prefill the form from an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            tags: post.tags.join(", "),
        }
    }

    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    /// Validate every field; all failures are reported together.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        collect_errors([
            TITLE_RULES.check("title", "Title", &self.title),
            EXCERPT_RULES.check("excerpt", "Excerpt", &self.excerpt),
            CONTENT_RULES.check("content", "Content", &self.content),
        ])
    }

    /// Text parts of the multipart body, in submission order.
    ///
    /// Tags are sent as a JSON array string, which is what the backend parses.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        let tags = serde_json::to_string(&self.tag_list()).unwrap_or_else(|_| "[]".to_string());
        vec![
            ("title", self.title.clone()),
            ("excerpt", self.excerpt.clone()),
            ("content", self.content.clone()),
            ("tags", tags),
        ]
    }
}

/// Split a comma-separated tag input, trimming and dropping empty entries.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Cover image
// ============================================================================

/// A newly chosen cover image, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl CoverImage {
    /// Multipart field name the backend expects for the image.
    pub const FIELD: &'static str = "cover_image";

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_cover_image(&self.content_type, self.bytes.len())
    }
}

/// Size and type check, usable before the file is read.
pub fn validate_cover_image(content_type: &str, size: usize) -> Result<(), ValidationError> {
    if size > COVER_IMAGE_MAX_BYTES {
        return Err(ValidationError::new(
            CoverImage::FIELD,
            "Image too large. Please select an image under 5MB.",
        ));
    }
    if !COVER_IMAGE_TYPES.contains(&content_type) {
        return Err(ValidationError::new(
            CoverImage::FIELD,
            "Invalid file type. Please select a JPEG, PNG, WebP or GIF image.",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PostForm {
        PostForm {
            title: "Ownership in Rust".into(),
            excerpt: "A short tour of moves and borrows.".into(),
            content: "<p>".to_string() + &"Rust tracks ownership at compile time. ".repeat(3) + "</p>",
            tags: "rust, ownership".into(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_reports_all_failures() {
        let form = PostForm {
            title: "".into(),
            excerpt: "x".repeat(EXCERPT_MAX_CHARS + 1),
            content: "too short".into(),
            tags: String::new(),
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "excerpt", "content"]);
        assert_eq!(errors[0].message, "Title is required");
        assert_eq!(errors[2].message, "Content should be at least 50 characters");
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a, b,,c "), vec!["a", "b", "c"]);
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_multipart_fields_encode_tags_as_json() {
        let fields = valid_form().multipart_fields();
        assert_eq!(fields[3], ("tags", r#"["rust","ownership"]"#.to_string()));
        assert_eq!(fields[0].0, "title");
    }

    #[test]
    fn test_from_post_joins_tags() {
        let post = Post {
            title: "T".into(),
            slug: "t".into(),
            tags: vec!["a".into(), "b".into()],
            ..Post::default()
        };
        assert_eq!(PostForm::from_post(&post).tags, "a, b");
    }

    #[test]
    fn test_cover_image_checks() {
        assert!(validate_cover_image("image/png", 1024).is_ok());
        assert!(validate_cover_image("image/png", COVER_IMAGE_MAX_BYTES + 1).is_err());
        let err = validate_cover_image("application/pdf", 10).unwrap_err();
        assert_eq!(err.field, "cover_image");
    }
}
