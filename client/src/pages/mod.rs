//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped data fetching and delegates rendering details
//! to `components`. Every page that fetches shows its route's skeleton as
//! the `Suspense` fallback, which is also what the server renders.

pub mod admin_dashboard;
pub mod admin_login;
pub mod home;
pub mod vehicle_detail;
pub mod vehicles;
