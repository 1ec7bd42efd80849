//! Route-level page components.

pub mod dashboard;
pub mod home;
