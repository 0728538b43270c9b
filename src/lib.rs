pub mod compile;
pub mod config;
pub mod error;
pub mod middleware;
pub mod plugin;
pub mod web;
