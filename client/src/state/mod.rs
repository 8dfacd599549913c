//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only cross-page state is the auth session. Vehicle data is fetched
//! per page through resources and never cached in a shared model.

pub mod auth;
