pub mod afc;
pub mod ap;
pub mod client;
pub mod dot11;
pub mod general;
pub mod geolocation;
pub mod mcast;
pub mod policy_tag;
pub mod rf;
pub mod rf_tag;
pub mod rrm;
pub mod wlan;

// Re-export all APIs
pub use afc::AfcApi;
pub use ap::ApApi;
pub use client::ClientApi;
pub use dot11::Dot11Api;
pub use general::GeneralApi;
pub use geolocation::GeolocationApi;
pub use mcast::McastApi;
pub use policy_tag::PolicyTagApi;
pub use rf::RfApi;
pub use rf_tag::RfTagApi;
pub use rrm::RrmApi;
pub use wlan::WlanApi;
