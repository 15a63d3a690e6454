//! Structs mirroring the Cisco IOS-XE wireless YANG models.
//!
//! Each top-level `*Response` wraps the module-qualified container exactly
//! as the controller returns it; everything below uses YANG leaf names in
//! kebab-case. Deep subtrees nobody has needed typed yet are kept as
//! [`serde_json::Value`].

pub mod afc;
pub mod ap;
pub mod client;
pub mod dot11;
pub mod general;
pub mod geolocation;
pub mod mcast;
pub mod rf;
pub mod rrm;
pub mod wlan;
pub mod yang;

pub use afc::*;
pub use ap::*;
pub use client::*;
pub use dot11::*;
pub use general::*;
pub use geolocation::*;
pub use mcast::*;
pub use rf::*;
pub use rrm::*;
pub use wlan::*;
