//! HTTP client module
//!
//! Thin wrapper over reqwest that builds URLs from raw path segments, stamps
//! default headers and credentials onto every request, and hands the raw
//! response back. Status codes are never turned into errors here; each API
//! operation decides what its own success looks like.

mod client;

pub use client::{read_json, HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
