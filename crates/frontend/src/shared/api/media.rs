//! Media URL resolution.
//!
//! The backend hands out image references in several shapes (absolute URLs,
//! `/media/...` paths, `media/...` paths, bare file names). Every one of them
//! is turned into a single absolute URL by walking [`RULES`] in order; the
//! first rule whose predicate accepts the reference produces the URL.

/// Path of the image that always exists on the media server.
pub const PLACEHOLDER_PATH: &str = "/media/posts/placeholder.jpg";

/// Which rule resolved a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaRuleKind {
    Placeholder,
    Absolute,
    RootedMedia,
    RelativeMedia,
    BareFilename,
    Generic,
}

/// One step of the resolution table.
pub struct MediaRule {
    pub kind: MediaRuleKind,
    pub applies: fn(&str) -> bool,
    pub resolve: fn(base: &str, reference: &str) -> String,
}

/// Resolution table, evaluated top to bottom. The last rule accepts
/// everything, so resolution is total.
pub static RULES: [MediaRule; 6] = [
    MediaRule {
        kind: MediaRuleKind::Placeholder,
        applies: |r| r.is_empty(),
        resolve: |base, _| placeholder_url(base),
    },
    MediaRule {
        kind: MediaRuleKind::Absolute,
        applies: |r| r.starts_with("http"),
        resolve: |_, r| r.to_string(),
    },
    MediaRule {
        kind: MediaRuleKind::RootedMedia,
        applies: |r| r.starts_with("/media/"),
        resolve: |base, r| format!("{base}{r}"),
    },
    MediaRule {
        kind: MediaRuleKind::RelativeMedia,
        applies: |r| r.starts_with("media/"),
        resolve: |base, r| format!("{base}/{r}"),
    },
    MediaRule {
        kind: MediaRuleKind::BareFilename,
        applies: |r| !r.contains('/'),
        resolve: |base, r| format!("{base}/media/posts/{r}"),
    },
    MediaRule {
        kind: MediaRuleKind::Generic,
        applies: |_| true,
        resolve: |base, r| format!("{base}/{}", r.strip_prefix('/').unwrap_or(r)),
    },
];

/// `{base}/media/posts/placeholder.jpg`
pub fn placeholder_url(base: &str) -> String {
    format!("{base}{PLACEHOLDER_PATH}")
}

/// The rule that handles `reference`.
pub fn classify(reference: &str) -> MediaRuleKind {
    rule_for(reference).kind
}

/// Absolute URL for a possibly relative media reference.
///
/// `None` and `""` both resolve to the placeholder. `base` is the media root
/// without a trailing slash.
pub fn resolve_media_url(base: &str, reference: Option<&str>) -> String {
    let reference = reference.unwrap_or_default();
    (rule_for(reference).resolve)(base, reference)
}

fn rule_for(reference: &str) -> &'static MediaRule {
    RULES
        .iter()
        .find(|rule| (rule.applies)(reference))
        .unwrap_or(&RULES[RULES.len() - 1])
}
