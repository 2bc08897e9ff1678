//! Shared integration test utilities

#![allow(dead_code)]

pub mod resolver;
pub mod server;

pub use resolver::RecordingResolver;
pub use server::ReleaseServer;
