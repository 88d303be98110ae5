//! Project Card Action - files opened issues and pull requests onto a GitHub
//! project board.
//!
//! On an `issues` (opened) or `pull_request` event, the action resolves a board
//! URL and column name to numeric IDs, then either moves the issue's existing
//! card on that board or creates a new card for the issue or pull request.

pub mod action;
pub mod cards;
pub mod config;
pub mod effects;
pub mod error;
pub mod github;
pub mod logging;
pub mod resolve;
pub mod runner;
pub mod types;
pub mod webhooks;

#[cfg(test)]
pub(crate) mod test_utils;
