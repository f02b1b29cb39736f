//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The page owns orchestration (the `ActivityBoard`) and delegates rendering
//! details to `components`.

pub mod board;
