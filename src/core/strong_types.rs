// Strong Types - newtypes for the keys that entities reference each other by

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a post in its graph snapshot. Ids are assigned in publish order,
/// so ordering by id is the same as ordering by the original post list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub usize);

impl PostId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post:{}", self.0)
    }
}

impl From<usize> for PostId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// Unique user handle. Authorship, views and connections all refer to users by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a username with validation
    pub fn new(name: &str) -> Result<Self, &'static str> {
        if name.trim().is_empty() {
            return Err("Username cannot be empty");
        }
        Ok(Self(name.to_string()))
    }

    /// Create username without validation (for lookups)
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Self::new_unchecked(s)
    }
}

impl From<String> for Username {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Free-form label on a user-to-user connection ("coworker", "seen", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionType(String);

impl ConnectionType {
    pub fn new(label: &str) -> Self {
        Self(label.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn coworker() -> Self {
        Self("coworker".to_string())
    }

    pub fn seen() -> Self {
        Self("seen".to_string())
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConnectionType {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The user attributes the attribute index is built over. Every indexed user
/// must carry all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeName {
    Age,
    Gender,
    Country,
    Job,
}

impl AttributeName {
    pub const ALL: [AttributeName; 4] = [
        AttributeName::Age,
        AttributeName::Gender,
        AttributeName::Country,
        AttributeName::Job,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeName::Age => "age",
            AttributeName::Gender => "gender",
            AttributeName::Country => "country",
            AttributeName::Job => "job",
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age" => Ok(AttributeName::Age),
            "gender" => Ok(AttributeName::Gender),
            "country" => Ok(AttributeName::Country),
            "job" => Ok(AttributeName::Job),
            other => Err(format!("unrecognized attribute name '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_validation() {
        assert!(Username::new("Mike").is_ok());
        assert!(Username::new("").is_err());
        assert!(Username::new("   ").is_err());
    }

    #[test]
    fn test_attribute_name_parsing() {
        for name in AttributeName::ALL {
            assert_eq!(name.as_str().parse::<AttributeName>(), Ok(name));
        }
        assert!("height".parse::<AttributeName>().is_err());
        // Attribute keys are matched exactly
        assert!("Country".parse::<AttributeName>().is_err());
    }

    #[test]
    fn test_post_id_ordering_follows_publish_order() {
        let mut ids = vec![PostId::new(2), PostId::new(0), PostId::new(1)];
        ids.sort();
        assert_eq!(ids, vec![PostId(0), PostId(1), PostId(2)]);
        assert_eq!(PostId::new(7).to_string(), "post:7");
    }
}
