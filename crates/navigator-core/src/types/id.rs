//! Typed identifiers for domain records.
//!
//! Records created by the navigator itself (profiles, applications, to-dos,
//! notifications) use UUID newtypes. Catalog programs keep the slug ids the
//! catalog ships with, wrapped in [`ProgramId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to define a newtype ID wrapper around `Uuid`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new time-ordered identifier.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Create an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Return the inner UUID value.
            pub fn into_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user profile.
    ProfileId
);

define_id!(
    /// Unique identifier for a tracked application.
    ApplicationId
);

define_id!(
    /// Unique identifier for a to-do item.
    TodoId
);

define_id!(
    /// Unique identifier for a notification.
    NotificationId
);

/// Catalog identifier of a program (e.g. `"detroit-home-repair"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(pub String);

impl ProgramId {
    /// Create a program id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProgramId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_id_new() {
        let id1 = TodoId::new();
        let id2 = TodoId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_application_id_from_str() {
        let uuid = Uuid::new_v4();
        let id: ApplicationId = uuid.to_string().parse().expect("should parse");
        assert_eq!(id.0, uuid);
        assert!("not-a-uuid".parse::<ApplicationId>().is_err());
    }

    #[test]
    fn test_program_id_is_transparent() {
        let id = ProgramId::from("food-assistance");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"food-assistance\"");
    }
}
