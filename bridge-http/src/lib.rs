//! # HTTP Bridge
//!
//! HTTP client abstraction shared by every backend-facing store.
//!
//! All network-touching components accept an `Arc<dyn HttpClient>` so tests
//! can substitute scripted doubles that record the requests they receive.
//! Each request is issued exactly once; callers decide what a failure means.

pub mod client;
pub mod error;
pub mod reqwest_client;

pub use client::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use error::{HttpError, Result};
pub use reqwest_client::ReqwestHttpClient;
