use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{AttributeName, ConnectionType, PostId, Username};
use crate::models::Comment;

/// A member of the network. Posts and peers are held by key; the graph
/// snapshot owns the actual records.
#[derive(Debug, Clone)]
pub struct User {
    username: Username,
    attributes: HashMap<String, String>,
    uploads: Vec<PostId>,
    seen: Vec<PostId>,
    comments: Vec<Arc<Comment>>,
    connections: HashMap<Username, ConnectionType>,
}

impl User {
    pub fn new(username: Username, attributes: HashMap<String, String>) -> Self {
        Self {
            username,
            attributes,
            uploads: Vec::new(),
            seen: Vec::new(),
            comments: Vec::new(),
            connections: HashMap::new(),
        }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, name: AttributeName) -> Option<&str> {
        self.attributes.get(name.as_str()).map(String::as_str)
    }

    /// Authored posts in upload order
    pub fn uploads(&self) -> &[PostId] {
        &self.uploads
    }

    /// Viewing history, repeats included
    pub fn seen(&self) -> &[PostId] {
        &self.seen
    }

    pub fn comments(&self) -> &[Arc<Comment>] {
        &self.comments
    }

    pub fn connections(&self) -> &HashMap<Username, ConnectionType> {
        &self.connections
    }

    pub fn connection_with(&self, peer: &Username) -> Option<&ConnectionType> {
        self.connections.get(peer)
    }

    pub(crate) fn record_upload(&mut self, post: PostId) {
        self.uploads.push(post);
    }

    pub(crate) fn record_view(&mut self, post: PostId) {
        self.seen.push(post);
    }

    pub(crate) fn record_comment(&mut self, comment: Arc<Comment>) {
        self.comments.push(comment);
    }

    /// One label per peer; setting it again replaces the previous label.
    pub(crate) fn set_connection(&mut self, peer: Username, label: ConnectionType) -> Option<ConnectionType> {
        self.connections.insert(peer, label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_overwrites_previous_label() {
        let mut user = User::new(Username::from("PizzaHater321"), HashMap::new());
        assert_eq!(user.set_connection(Username::from("Mike"), ConnectionType::seen()), None);
        let previous = user.set_connection(Username::from("Mike"), ConnectionType::coworker());

        assert_eq!(previous, Some(ConnectionType::seen()));
        assert_eq!(user.connections().len(), 1);
        assert_eq!(
            user.connection_with(&Username::from("Mike")),
            Some(&ConnectionType::coworker())
        );
    }

    #[test]
    fn test_attribute_lookup_by_name() {
        let attributes = HashMap::from([
            ("country".to_string(), "Italy".to_string()),
            ("job".to_string(), "Cashier".to_string()),
        ]);
        let user = User::new(Username::from("Vic"), attributes);

        assert_eq!(user.attribute(AttributeName::Country), Some("Italy"));
        assert_eq!(user.attribute(AttributeName::Age), None);
    }
}
