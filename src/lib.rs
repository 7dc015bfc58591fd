// groupctl: GoPhish target group manager
// Exposes the ingestion, sampling and group query logic as a library

pub mod cli;
pub mod config;
pub mod contact;
pub mod core;
pub mod error;
pub mod groups;
pub mod header;
pub mod http;
pub mod ingest;
pub mod sample;
pub mod sanitize;
pub mod validation;
