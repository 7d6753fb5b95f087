//! Content

use jiff::civil::Date;

use crate::ids::PostId;

/// Editorial content entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    /// Post identifier, assigned by the store at publication
    pub id: PostId,

    /// Headline
    pub title: String,

    /// Short teaser shown in listings
    pub excerpt: String,

    /// Full article body
    pub body: String,

    /// Header image URL
    pub image: String,

    /// Publication date
    pub published_on: Date,

    /// Author display name
    pub author: String,
}

/// Attributes for a post about to be published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Headline
    pub title: String,

    /// Short teaser shown in listings
    pub excerpt: String,

    /// Full article body
    pub body: String,

    /// Header image URL
    pub image: String,

    /// Author display name
    pub author: String,
}

/// Editorial posts, most recent first. Prepend-only; posts are never updated
/// or deleted.
#[derive(Debug, Default)]
pub struct ContentStore {
    posts: Vec<BlogPost>,
}

impl ContentStore {
    /// Create an empty content store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a content store pre-populated with the given posts, assumed to
    /// already be in most-recent-first order.
    #[must_use]
    pub fn with_posts(posts: Vec<BlogPost>) -> Self {
        Self { posts }
    }

    /// Publish a post dated `published_on`, assigning it a fresh identifier
    /// and prepending it. Returns the assigned identifier.
    pub fn publish(&mut self, post: NewPost, published_on: Date) -> PostId {
        let id = PostId::new();

        self.posts.insert(
            0,
            BlogPost {
                id,
                title: post.title,
                excerpt: post.excerpt,
                body: post.body,
                image: post.image,
                published_on,
                author: post.author,
            },
        );

        id
    }

    /// All posts, most recent first.
    #[must_use]
    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    /// Number of published posts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check whether any post has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn draft(title: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            excerpt: "Descubre el oro líquido.".to_string(),
            body: "Lorem ipsum...".to_string(),
            image: "https://example.test/post.jpg".to_string(),
            author: "Chef María".to_string(),
        }
    }

    #[test]
    fn publish_prepends_and_assigns_unique_ids() {
        let mut content = ContentStore::new();

        let first = content.publish(draft("Recetas con Picual"), date(2026, 8, 25));
        let second = content.publish(draft("Prensado en Frío"), date(2026, 8, 26));

        assert_ne!(first, second);
        assert_eq!(content.len(), 2);
        assert_eq!(content.posts().first().map(|p| p.id), Some(second));
        assert_eq!(
            content.posts().first().map(|p| p.title.as_str()),
            Some("Prensado en Frío")
        );
    }

    #[test]
    fn publish_stamps_the_given_date() {
        let mut content = ContentStore::new();

        content.publish(draft("Maridaje"), date(2026, 8, 26));

        assert_eq!(
            content.posts().first().map(|p| p.published_on),
            Some(date(2026, 8, 26))
        );
    }
}
