//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board from `BoardState` in Leptos context and report
//! user intent upward through callbacks; none of them perform network calls.

pub mod activity_card;
pub mod activity_list;
pub mod activity_select;
pub mod notice_banner;
pub mod participant_list;
pub mod signup_form;
