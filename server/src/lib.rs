// server/src/lib.rs

//! HTTP façade over the skillbase store: configuration, bootstrap and the
//! actix-web routes exposing the seven directory operations.

pub mod bootstrap;
pub mod config;
pub mod errors;
pub mod state;
pub mod web;
