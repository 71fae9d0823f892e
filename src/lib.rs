//! Library exports for the health server, shared between the binary and tests.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod startup;
pub mod utils;
