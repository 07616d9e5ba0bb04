pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod invoker;
pub mod logging;
pub mod proto;
