//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome shared by every route, reading shared state
//! from Leptos context providers.

pub mod header;
pub mod reconnecting_loader;
