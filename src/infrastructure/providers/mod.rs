//! Provider API access used for live key probing

pub mod client;

pub use client::{HttpProbeClient, HttpProbeClientConfig};
