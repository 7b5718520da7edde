//! HTTP client for the MetaTrader 5 bridge.
//!
//! This module provides the bridge client, its error type and the typed
//! request and response records for the routes the scripts use.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::Mt5HttpClient;
pub use error::*;
pub use models::*;
pub use query::*;
