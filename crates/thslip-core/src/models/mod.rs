//! Data models for extracted slips, subscriptions and configuration.

pub mod config;
pub mod slip;
pub mod subscription;
