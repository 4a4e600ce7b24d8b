use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::core::{AttributeName, Username};
use crate::error::{AppError, AppResult};
use crate::models::User;

/// Attribute name -> attribute value -> users holding exactly that value.
#[derive(Debug, Clone, Default)]
pub struct AttributeIndex {
    buckets: HashMap<AttributeName, HashMap<String, BTreeSet<Username>>>,
}

impl AttributeIndex {
    /// Index every user under each recognized attribute.
    ///
    /// Fails on the first user lacking one of the recognized attributes
    /// rather than leaving that user out of attribute filtering.
    pub fn build(users: &[User]) -> AppResult<Self> {
        let mut buckets: HashMap<AttributeName, HashMap<String, BTreeSet<Username>>> = HashMap::new();
        for user in users {
            for name in AttributeName::ALL {
                let value = user.attribute(name).ok_or_else(|| AppError::MissingAttribute {
                    username: user.username().to_string(),
                    attribute: name.to_string(),
                })?;

                buckets
                    .entry(name)
                    .or_default()
                    .entry(value.to_string())
                    .or_default()
                    .insert(user.username().clone());
            }
        }

        debug!(users = users.len(), "built attribute index");
        Ok(Self { buckets })
    }

    /// Users whose `name` attribute equals `value` exactly.
    pub fn users_with(&self, name: AttributeName, value: &str) -> Option<&BTreeSet<Username>> {
        self.buckets.get(&name).and_then(|values| values.get(value))
    }

    /// Distinct values seen for `name`.
    pub fn values(&self, name: AttributeName) -> impl Iterator<Item = &str> {
        self.buckets
            .get(&name)
            .into_iter()
            .flat_map(|values| values.keys().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, age: &str, gender: &str, country: &str, job: &str) -> User {
        let attributes = HashMap::from([
            ("age".to_string(), age.to_string()),
            ("gender".to_string(), gender.to_string()),
            ("country".to_string(), country.to_string()),
            ("job".to_string(), job.to_string()),
        ]);
        User::new(Username::from(name), attributes)
    }

    fn names(raw: &[&str]) -> BTreeSet<Username> {
        raw.iter().map(|n| Username::from(*n)).collect()
    }

    #[test]
    fn test_bucket_holds_exactly_matching_users() {
        let users = vec![
            user("Mike", "21", "male", "Italy", "Pizza Chef"),
            user("Vic", "18", "female", "Italy", "Cashier"),
            user("PizzaHater321", "12", "male", "USA", "Student"),
        ];
        let index = AttributeIndex::build(&users).unwrap();

        assert_eq!(index.users_with(AttributeName::Country, "Italy"), Some(&names(&["Mike", "Vic"])));
        assert_eq!(index.users_with(AttributeName::Country, "USA"), Some(&names(&["PizzaHater321"])));
        assert_eq!(
            index.users_with(AttributeName::Gender, "male"),
            Some(&names(&["Mike", "PizzaHater321"]))
        );
        assert_eq!(index.users_with(AttributeName::Job, "Pizza Chef"), Some(&names(&["Mike"])));
    }

    #[test]
    fn test_values_are_matched_exactly() {
        let index = AttributeIndex::build(&[user("Mike", "21", "male", "Italy", "Pizza Chef")]).unwrap();
        assert_eq!(index.users_with(AttributeName::Country, "italy"), None);
        assert_eq!(index.users_with(AttributeName::Age, "22"), None);
    }

    #[test]
    fn test_missing_attribute_fails_naming_user_and_key() {
        let mut incomplete = HashMap::from([
            ("age".to_string(), "30".to_string()),
            ("gender".to_string(), "female".to_string()),
            ("country".to_string(), "USA".to_string()),
        ]);
        incomplete.insert("hobby".to_string(), "chess".to_string());
        let users = vec![
            user("Mike", "21", "male", "Italy", "Pizza Chef"),
            User::new(Username::from("Jobless"), incomplete),
        ];

        match AttributeIndex::build(&users) {
            Err(AppError::MissingAttribute { username, attribute }) => {
                assert_eq!(username, "Jobless");
                assert_eq!(attribute, "job");
            }
            other => panic!("expected MissingAttribute, got {:?}", other),
        }
    }

    #[test]
    fn test_values_lists_distinct_values() {
        let users = vec![
            user("Mike", "21", "male", "Italy", "Pizza Chef"),
            user("Vic", "18", "female", "Italy", "Cashier"),
        ];
        let index = AttributeIndex::build(&users).unwrap();
        let mut countries: Vec<&str> = index.values(AttributeName::Country).collect();
        countries.sort();
        assert_eq!(countries, vec!["Italy"]);
    }

    #[test]
    fn test_empty_user_list_builds_empty_index() {
        let index = AttributeIndex::build(&[]).unwrap();
        assert_eq!(index.values(AttributeName::Job).count(), 0);
    }
}
