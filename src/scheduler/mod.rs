//! Spaced-repetition scheduling.
//!
//! Data flows one way: the session builder calls the prioritizer, which asks
//! the interval model whether each item is due. Grading a card runs the
//! mastery transition and the interval model to produce a [`ReviewUpdate`].
//!
//! Everything here is pure with respect to its inputs; `now` is always passed in.
//!
//! [`ReviewUpdate`]: crate::models::ReviewUpdate

pub mod interval;
pub mod prioritizer;
pub mod review;
pub mod session_builder;
pub mod transition;

pub use interval::{base_interval_days, ease_factor, is_due, next_review_date};
pub use prioritizer::{prioritize, shuffle_items};
pub use review::{apply_review, record_review};
pub use session_builder::{SessionBuilder, build_session};
pub use transition::{Transition, transition};
