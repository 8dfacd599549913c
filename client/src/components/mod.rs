//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components are presentational and read shared state from context only
//! where they must (`RequireAuth`, `SiteHeader`). Pages own data fetching.

pub mod alert;
pub mod client_only;
pub mod require_auth;
pub mod site_header;
pub mod skeletons;
pub mod vehicle_card;
