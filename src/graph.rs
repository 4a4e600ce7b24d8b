// SocialGraph - in-memory snapshot of the network
// Owns every user and post; relations between them are expressed by key

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::core::{ConnectionType, PostId, Username};
use crate::error::{AppError, AppResult};
use crate::models::{Comment, Post, User};

/// Users and posts in registration/publish order, plus a username lookup table.
///
/// Indexes derived from a graph are point-in-time views: rebuild them after
/// any mutation.
#[derive(Debug, Default)]
pub struct SocialGraph {
    users: Vec<User>,
    user_lookup: HashMap<Username, usize>,
    posts: Vec<Post>,
}

impl SocialGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user. Usernames must be unique and non-empty.
    pub fn register_user(
        &mut self,
        username: &str,
        attributes: HashMap<String, String>,
    ) -> AppResult<Username> {
        let username = Username::new(username).map_err(|e| AppError::Validation(e.to_string()))?;
        if self.user_lookup.contains_key(&username) {
            return Err(AppError::Validation(format!(
                "username '{}' is already registered",
                username
            )));
        }

        debug!(username = %username, "registering user");
        self.user_lookup.insert(username.clone(), self.users.len());
        self.users.push(User::new(username.clone(), attributes));
        Ok(username)
    }

    pub fn publish(&mut self, author: &Username, content: &str) -> AppResult<PostId> {
        self.publish_at(author, content, Utc::now())
    }

    /// Publish a post with an explicit creation time and record it in the
    /// author's uploads.
    pub fn publish_at(
        &mut self,
        author: &Username,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<PostId> {
        let id = PostId::new(self.posts.len());
        self.user_mut(author)?.record_upload(id);
        self.posts.push(Post::new(id, author.clone(), content, created_at));
        debug!(post_id = %id, author = %author, "published post");
        Ok(id)
    }

    /// Every view is kept in the viewer's history; the post only tracks
    /// distinct viewers.
    pub fn view(&mut self, viewer: &Username, post: PostId) -> AppResult<()> {
        self.ensure_post(post)?;
        self.user_mut(viewer)?.record_view(post);
        self.post_mut(post)?.add_viewer(viewer.clone());
        Ok(())
    }

    pub fn comment(&mut self, author: &Username, post: PostId, content: &str) -> AppResult<Arc<Comment>> {
        self.comment_at(author, post, content, Utc::now())
    }

    pub fn comment_at(
        &mut self,
        author: &Username,
        post: PostId,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> AppResult<Arc<Comment>> {
        self.ensure_post(post)?;
        let comment = Arc::new(Comment::new(author.clone(), content, created_at));
        self.user_mut(author)?.record_comment(Arc::clone(&comment));
        self.post_mut(post)?.add_comment(Arc::clone(&comment));
        Ok(comment)
    }

    /// Label `user`'s relation to `peer`, replacing any previous label.
    /// The peer does not have to be registered.
    pub fn connect(&mut self, user: &Username, peer: &Username, label: ConnectionType) -> AppResult<()> {
        self.user_mut(user)?.set_connection(peer.clone(), label);
        Ok(())
    }

    pub fn connection_label(&self, user: &Username, peer: &Username) -> Option<&ConnectionType> {
        self.user(user).and_then(|u| u.connection_with(peer))
    }

    pub fn user(&self, username: &Username) -> Option<&User> {
        self.user_lookup.get(username).map(|&idx| &self.users[idx])
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.get(id.value())
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    fn user_mut(&mut self, username: &Username) -> AppResult<&mut User> {
        match self.user_lookup.get(username) {
            Some(&idx) => Ok(&mut self.users[idx]),
            None => Err(AppError::NotFound(format!("user '{}'", username))),
        }
    }

    fn post_mut(&mut self, id: PostId) -> AppResult<&mut Post> {
        self.posts
            .get_mut(id.value())
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    fn ensure_post(&self, id: PostId) -> AppResult<()> {
        if self.post(id).is_none() {
            return Err(AppError::NotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with_two_users() -> (SocialGraph, Username, Username) {
        let mut graph = SocialGraph::new();
        let mike = graph.register_user("Mike", HashMap::new()).unwrap();
        let vic = graph.register_user("Vic", HashMap::new()).unwrap();
        (graph, mike, vic)
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let (mut graph, _, _) = graph_with_two_users();
        let result = graph.register_user("Mike", HashMap::new());
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(graph.users().len(), 2);
    }

    #[test]
    fn test_publish_records_upload() {
        let (mut graph, mike, _) = graph_with_two_users();
        let first = graph.publish(&mike, "Pizza is great").unwrap();
        let second = graph.publish(&mike, "More pizza").unwrap();

        assert_eq!(graph.user(&mike).unwrap().uploads(), &[first, second]);
        assert_eq!(graph.post(second).unwrap().author(), &mike);
    }

    #[test]
    fn test_publish_by_unknown_author_fails() {
        let mut graph = SocialGraph::new();
        let result = graph.publish(&Username::from("ghost"), "boo");
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(graph.posts().is_empty());
    }

    #[test]
    fn test_repeated_view_keeps_history_but_not_duplicate_viewer() {
        let (mut graph, mike, vic) = graph_with_two_users();
        let post = graph.publish(&mike, "Torus Shaped Pizza").unwrap();
        graph.view(&vic, post).unwrap();
        graph.view(&vic, post).unwrap();

        assert_eq!(graph.user(&vic).unwrap().seen(), &[post, post]);
        assert_eq!(graph.post(post).unwrap().viewers(), &[vic]);
    }

    #[test]
    fn test_view_of_missing_post_leaves_history_untouched() {
        let (mut graph, _, vic) = graph_with_two_users();
        assert!(graph.view(&vic, PostId::new(3)).is_err());
        assert!(graph.user(&vic).unwrap().seen().is_empty());
    }

    #[test]
    fn test_comment_is_shared_between_post_and_author() {
        let (mut graph, mike, vic) = graph_with_two_users();
        let post = graph.publish(&mike, "Torus Shaped Pizza").unwrap();
        let comment = graph.comment(&vic, post, "It's called innovation bozo").unwrap();

        let on_post = &graph.post(post).unwrap().comments()[0];
        let in_history = &graph.user(&vic).unwrap().comments()[0];
        assert!(Arc::ptr_eq(on_post, &comment));
        assert!(Arc::ptr_eq(in_history, &comment));
        assert_eq!(comment.author(), &vic);
    }

    #[test]
    fn test_connect_overwrites_label() {
        let (mut graph, mike, vic) = graph_with_two_users();
        graph.connect(&mike, &vic, ConnectionType::seen()).unwrap();
        graph.connect(&mike, &vic, ConnectionType::coworker()).unwrap();

        assert_eq!(graph.connection_label(&mike, &vic), Some(&ConnectionType::coworker()));
        assert_eq!(graph.connection_label(&vic, &mike), None);
    }
}
