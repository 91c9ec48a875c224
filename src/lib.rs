//! Exhibit Estimator - trade show booth and travel cost estimation.
//!
//! Prices a booth configuration line by line, combines it with space rental,
//! travel and fixed allowances into a grand total, and serves the wizard,
//! vendor directory and quote flows over HTTP.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
