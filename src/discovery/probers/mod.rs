//! Prober implementations

pub mod http;

pub use http::HttpProber;
