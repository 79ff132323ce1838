//! wax-ui - Shared UI types and components for wax
//!
//! Contains display types, stores, and pure view components used by the web
//! app. Views take state in and hand interactions back through callbacks; no
//! data fetching happens here.

pub mod components;
pub mod display_types;
pub mod stores;

pub use components::*;
pub use display_types::*;
