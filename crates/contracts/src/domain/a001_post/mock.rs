//! Sample posts shown when the listing request fails.

use super::aggregate::Post;

pub fn mock_posts() -> Vec<Post> {
    vec![
        sample(
            1,
            "Getting Started with React",
            "Learn the basics of React and build your first app.",
            "<p>React is a JavaScript library for building user interfaces...</p>",
            &["react", "javascript", "frontend"],
            "2025-04-10T12:00:00Z",
            5,
        ),
        sample(
            2,
            "Introduction to Django REST Framework",
            "Build powerful APIs with Django REST Framework.",
            "<p>Django REST framework is a powerful and flexible toolkit for building Web APIs...</p>",
            &["django", "python", "backend", "api"],
            "2025-04-12T12:00:00Z",
            7,
        ),
        sample(
            3,
            "Creating a Modern Blog with React and Django",
            "A comprehensive guide to building a modern blog with React and Django.",
            "<p>In this tutorial, we will build a modern blog application using React for the frontend and Django for the backend...</p>",
            &["react", "django", "fullstack", "tutorial"],
            "2025-04-15T12:00:00Z",
            10,
        ),
    ]
}

fn sample(
    id: i64,
    title: &str,
    excerpt: &str,
    content: &str,
    tags: &[&str],
    published_at: &str,
    reading_time: u32,
) -> Post {
    Post {
        id,
        title: title.to_string(),
        slug: slugify(title),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        cover_image: None,
        cover_image_url: None,
        published_at: Some(published_at.to_string()),
        reading_time: Some(reading_time),
    }
}

fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_slugs() {
        let slugs: Vec<String> = mock_posts().into_iter().map(|p| p.slug).collect();
        assert_eq!(
            slugs,
            vec![
                "getting-started-with-react",
                "introduction-to-django-rest-framework",
                "creating-a-modern-blog-with-react-and-django",
            ]
        );
    }
}
