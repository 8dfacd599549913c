//! Network layer: wire types and REST helpers for the dealership API.

pub mod api;
pub mod types;
