//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render pieces of a page from props and keep only local view
//! state; page-level data comes from the owning page.

pub mod question_item;
