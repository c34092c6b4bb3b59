//! Post API functions used by the list, details and editor pages.

use contracts::domain::a001_post::aggregate::Post;
use contracts::domain::a001_post::form::{CoverImage, PostForm};

use crate::shared::api::{ApiClient, ApiError, FilePart, Method, MultipartForm};

pub const POSTS_ENDPOINT: &str = "/posts/";

/// `/posts/{slug}/` with the slug percent-encoded.
pub fn post_endpoint(slug: &str) -> String {
    format!("/posts/{}/", urlencoding::encode(slug))
}

/// `/posts/{slug}/related/`
pub fn related_endpoint(slug: &str) -> String {
    format!("/posts/{}/related/", urlencoding::encode(slug))
}

pub async fn fetch_posts(api: &ApiClient) -> Result<Vec<Post>, ApiError> {
    api.get_json(POSTS_ENDPOINT).await
}

pub async fn fetch_post(api: &ApiClient, slug: &str) -> Result<Post, ApiError> {
    api.get_json(&post_endpoint(slug)).await
}

pub async fn fetch_related(api: &ApiClient, slug: &str) -> Result<Vec<Post>, ApiError> {
    api.get_json(&related_endpoint(slug)).await
}

/// Create a post; the cover image is optional.
pub async fn create_post(
    api: &ApiClient,
    form: &PostForm,
    image: Option<&CoverImage>,
) -> Result<Post, ApiError> {
    api.post_multipart(POSTS_ENDPOINT, post_multipart(form, image))
        .await?
        .into_typed()
}

/// Update a post in place. Without a new image the stored one is kept.
pub async fn update_post(
    api: &ApiClient,
    slug: &str,
    form: &PostForm,
    image: Option<&CoverImage>,
) -> Result<Post, ApiError> {
    api.send_multipart(&post_endpoint(slug), post_multipart(form, image), Method::Patch)
        .await?
        .into_typed()
}

/// Delete a post. Both `204 No Content` and a JSON acknowledgement count as
/// success.
pub async fn delete_post(api: &ApiClient, slug: &str) -> Result<(), ApiError> {
    api.delete_api(&post_endpoint(slug)).await.map(|_| ())
}

/// Multipart body for create/update. `cover_image` is only present when a new
/// image was chosen.
pub fn post_multipart(form: &PostForm, image: Option<&CoverImage>) -> MultipartForm {
    let mut multipart = form
        .multipart_fields()
        .into_iter()
        .fold(MultipartForm::new(), |acc, (name, value)| acc.text(name, value));

    if let Some(image) = image {
        multipart = multipart.file(
            CoverImage::FIELD,
            FilePart {
                file_name: image.file_name.clone(),
                content_type: image.content_type.clone(),
                bytes: image.bytes.clone(),
            },
        );
    }
    multipart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::request::{MultipartPart, RequestBody};
    use crate::shared::api::testing::ScriptedTransport;
    use crate::shared::api::transport::RawResponse;
    use crate::shared::api::ApiConfig;
    use std::sync::Arc;

    fn client(transport: ScriptedTransport) -> (ApiClient, Arc<ScriptedTransport>) {
        let transport = Arc::new(transport);
        let config = ApiConfig::new("https://x.test").unwrap();
        (ApiClient::with_transport(config, transport.clone()), transport)
    }

    fn form() -> PostForm {
        PostForm {
            title: "Hello".into(),
            excerpt: "Short".into(),
            content: "Body".into(),
            tags: "a, b".into(),
        }
    }

    #[test]
    fn test_endpoints_encode_slug() {
        assert_eq!(post_endpoint("hello-world"), "/posts/hello-world/");
        assert_eq!(post_endpoint("a b/c"), "/posts/a%20b%2Fc/");
        assert_eq!(related_endpoint("x"), "/posts/x/related/");
    }

    #[test]
    fn test_multipart_without_image() {
        let multipart = post_multipart(&form(), None);
        let names: Vec<&str> = multipart.parts().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["title", "excerpt", "content", "tags"]);
        assert_eq!(
            multipart.get("tags"),
            Some(&MultipartPart::Text(r#"["a","b"]"#.into()))
        );
    }

    #[test]
    fn test_multipart_with_image() {
        let image = CoverImage {
            file_name: "c.jpg".into(),
            content_type: "image/jpeg".into(),
            bytes: vec![1, 2],
        };
        let multipart = post_multipart(&form(), Some(&image));
        match multipart.get("cover_image") {
            Some(MultipartPart::File(file)) => {
                assert_eq!(file.file_name, "c.jpg");
                assert_eq!(file.bytes, vec![1, 2]);
            }
            other => panic!("unexpected part: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_posts() {
        let (api, _) = client(ScriptedTransport::new().respond(
            "https://x.test/api/posts/".into(),
            RawResponse::new(200, r#"[{"id": 1, "title": "A", "slug": "a", "tags": ["x"]}]"#),
        ));
        let posts = fetch_posts(&api).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].tags, vec!["x"]);
    }

    #[tokio::test]
    async fn test_update_post_patches_multipart() {
        let (api, transport) = client(ScriptedTransport::new().respond(
            "https://x.test/api/posts/hello/".into(),
            RawResponse::new(200, r#"{"title": "Hello", "slug": "hello"}"#),
        ));
        let post = update_post(&api, "hello", &form(), None).await.unwrap();
        assert_eq!(post.slug, "hello");

        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::Patch);
        assert_eq!(sent[0].header("Content-Type"), None);
        assert!(matches!(sent[0].body, Some(RequestBody::Multipart(_))));
    }

    #[tokio::test]
    async fn test_delete_post_accepts_no_content() {
        let (api, _) = client(ScriptedTransport::new().respond(
            "https://x.test/api/posts/hello/".into(),
            RawResponse::new(204, ""),
        ));
        assert_eq!(delete_post(&api, "hello").await, Ok(()));
    }

    #[tokio::test]
    async fn test_delete_post_accepts_empty_ok_body() {
        let (api, _) = client(ScriptedTransport::new().respond(
            "https://x.test/api/posts/hello/".into(),
            RawResponse::new(200, ""),
        ));
        assert_eq!(delete_post(&api, "hello").await, Ok(()));
    }

    #[tokio::test]
    async fn test_fetch_post_not_found() {
        let (api, _) = client(ScriptedTransport::new());
        let err = fetch_post(&api, "missing").await.unwrap_err();
        assert_eq!(err.to_string(), "Not found.");
    }
}
