//! Network helpers for talking to services outside the app.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only remote dependency of the shell is the authentication backend;
//! its HTTP calls are isolated here so state modules stay transport-free.

pub mod api;
