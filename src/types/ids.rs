//! Newtype wrappers for GitHub identifiers.
//!
//! Project boards, columns, cards and card content all use bare `u64` IDs in the
//! REST API. Wrapping them keeps a column ID from being passed where a card ID is
//! expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Returns true for the zero value the API uses when an ID is absent.
            pub fn is_unset(&self) -> bool {
                self.0 == 0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                $name(n)
            }
        }
    };
}

numeric_id!(
    /// A project board ID.
    ProjectId
);

numeric_id!(
    /// A column ID within a project board.
    ColumnId
);

numeric_id!(
    /// A project card ID.
    CardId
);

numeric_id!(
    /// The global ID of the issue or pull request a card points at.
    ///
    /// This is the `id` field of the payload object, not its number.
    ContentId
);

/// An issue (or pull request) number within a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueNumber(pub u64);

impl fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for IssueNumber {
    fn from(n: u64) -> Self {
        IssueNumber(n)
    }
}

/// A repository identifier (owner/repo format).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub repo: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        RepoId {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod numeric {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn deserializes_from_bare_number(n: u64) {
                let parsed: CardId = serde_json::from_str(&n.to_string()).unwrap();
                prop_assert_eq!(parsed, CardId(n));
            }

            #[test]
            fn unset_only_for_zero(n: u64) {
                prop_assert_eq!(ProjectId(n).is_unset(), n == 0);
            }
        }

        #[test]
        fn display_is_bare_number() {
            assert_eq!(ColumnId(42).to_string(), "42");
            assert_eq!(IssueNumber(7).to_string(), "#7");
        }
    }

    mod repo_id {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn display_format(
                owner in "[a-zA-Z][a-zA-Z0-9-]{0,38}",
                repo in "[a-zA-Z][a-zA-Z0-9_-]{0,99}"
            ) {
                let id = RepoId::new(&owner, &repo);
                prop_assert_eq!(format!("{}", id), format!("{}/{}", owner, repo));
            }
        }
    }
}
