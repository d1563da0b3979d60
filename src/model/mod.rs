//! Model layer - state types with no rendering concerns
//!
//! - `theme` - display preference store and palettes
//! - `section` - document extents and active-section computation
//! - `project` - the fixed case-study catalog
//! - `form` - contact form values, rules, and errors
//! - `modal` - overlay stack
//! - `ui` - app mode and nav menu state machine

pub mod form;
pub mod modal;
pub mod project;
pub mod section;
pub mod theme;
pub mod ui;
