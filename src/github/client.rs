//! Octocrab client wrapper.
//!
//! Project boards can be owned by organizations as well as repositories, so
//! unlike a repo-scoped client this wrapper carries no repository; each effect
//! names what it targets.

use octocrab::Octocrab;

/// A GitHub API client used to interpret project effects.
#[derive(Clone)]
pub struct OctocrabClient {
    client: Octocrab,
}

impl OctocrabClient {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Creates a client from an optional GitHub token.
    ///
    /// Without a token the client is unauthenticated, which only works for
    /// public boards and has a much lower rate limit.
    pub fn from_token(token: Option<String>) -> Result<Self, octocrab::Error> {
        let builder = Octocrab::builder();
        let client = match token {
            Some(token) => builder.personal_token(token).build()?,
            None => builder.build()?,
        };
        Ok(Self::new(client))
    }

    /// Returns a reference to the underlying octocrab client.
    pub fn inner(&self) -> &Octocrab {
        &self.client
    }
}

impl std::fmt::Debug for OctocrabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OctocrabClient").finish_non_exhaustive()
    }
}
