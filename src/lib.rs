pub mod config;
pub mod error;
pub mod filter;
pub mod http_client;
pub mod lister;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod scope;

pub use crate::error::ScopeError;
pub use crate::filter::FilterConfig;
pub use crate::pipeline::{Pipeline, RunSummary};
