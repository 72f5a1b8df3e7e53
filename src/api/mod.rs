//! Backend API
//!
//! HTTP client adapter for the club analysis backend. `client` holds the
//! gloo-net glue, `response` the pure status/body normalization, `error`
//! the error kind, and `types` the request/response shapes.

pub mod client;
pub mod error;
pub mod response;
pub mod types;

pub use client::{
    check_health, get_api_base, group_clubs, set_api_base, trigger_email_scraping,
    trigger_instagram_scraping, trigger_whatsapp_analysis,
};
pub use error::ApiError;
pub use types::{Club, ClubDataInput, ClusteringResult, RankedClub, RankedCluster};
