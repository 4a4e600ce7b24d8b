use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::core::{PostId, Username};
use crate::models::Comment;

/// A published post. The content is fixed at publish time; comments and
/// viewers accumulate afterwards.
#[derive(Debug, Clone)]
pub struct Post {
    id: PostId,
    content: String,
    author: Username,
    created_at: DateTime<Utc>,
    comments: Vec<Arc<Comment>>,
    viewers: Vec<Username>,
}

impl Post {
    pub fn new(
        id: PostId,
        author: Username,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            author,
            created_at,
            comments: Vec::new(),
            viewers: Vec::new(),
        }
    }

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author(&self) -> &Username {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn comments(&self) -> &[Arc<Comment>] {
        &self.comments
    }

    /// Distinct viewers in first-view order
    pub fn viewers(&self) -> &[Username] {
        &self.viewers
    }

    pub fn has_viewer(&self, username: &Username) -> bool {
        self.viewers.contains(username)
    }

    pub(crate) fn add_comment(&mut self, comment: Arc<Comment>) {
        self.comments.push(comment);
    }

    /// Returns false when the viewer was already recorded.
    pub(crate) fn add_viewer(&mut self, viewer: Username) -> bool {
        if self.has_viewer(&viewer) {
            return false;
        }
        self.viewers.push(viewer);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post::new(PostId::new(0), Username::from("Mike"), "Torus Shaped Pizza", Utc::now())
    }

    #[test]
    fn test_viewers_have_set_semantics() {
        let mut post = post();
        assert!(post.add_viewer(Username::from("Vic")));
        assert!(post.add_viewer(Username::from("PizzaHater321")));
        assert!(!post.add_viewer(Username::from("Vic")));

        assert_eq!(post.viewers().len(), 2);
        assert_eq!(post.viewers()[0].as_str(), "Vic");
        assert!(post.has_viewer(&Username::from("PizzaHater321")));
    }

    #[test]
    fn test_comments_keep_insertion_order() {
        let mut post = post();
        post.add_comment(Arc::new(Comment::new(Username::from("Vic"), "first", Utc::now())));
        post.add_comment(Arc::new(Comment::new(Username::from("Mike"), "second", Utc::now())));

        let contents: Vec<&str> = post.comments().iter().map(|c| c.content()).collect();
        assert_eq!(contents, vec!["first", "second"]);
    }
}
