//! Client-side state for the activity board.
//!
//! DESIGN
//! ======
//! `board` holds the catalog snapshot and form inputs; `notice` models the
//! single transient status message shown beside them.

pub mod board;
pub mod notice;
