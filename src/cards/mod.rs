//! Locating and placing project cards.

mod locate;
mod reconcile;

pub use locate::find_cards_for_issue;
pub use reconcile::{CardOutcome, reconcile_card};
