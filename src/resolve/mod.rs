//! Resolution of a board URL and column name into numeric IDs.
//!
//! Both lookups read a single page of results. A zero ID is never returned as a
//! resolved value.

mod board;
mod column;

pub use board::{ORG_PROJECTS_PER_PAGE, resolve_project_id};
pub use column::resolve_column_id;
