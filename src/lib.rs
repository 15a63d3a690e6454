/*
 * Cisco Catalyst 9800 WNC RESTCONF client
 */

// Internal modules
mod auth;
mod client;
mod config;
mod error;
pub mod apis;
pub mod models;
pub mod restconf;


// Re-export public types and interfaces
pub use apis::{
    AfcApi, ApApi, ClientApi, Dot11Api, GeneralApi, GeolocationApi, McastApi, PolicyTagApi,
    RfApi, RfTagApi, RrmApi, WlanApi,
};
pub use auth::{Authentication, BasicAuth, BearerAuth, NoAuth};
pub use client::WncClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{WncError, WncResult};
pub use models::*;

// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BasicAuth, BearerAuth, ClientConfig, NoAuth, WncClient, WncError, WncResult,
        // Common model types
        ApTag, CapwapData, PolicyListEntry, RfProfile, RfTag, WlanCfgEntry, WlanPolicyMap,
    };
}
