//! Polarity - sentiment inference service
//!
//! A thin HTTP wrapper around a pretrained text-sentiment classifier,
//! capturing user feedback on predictions for later analysis.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod nlp;
pub mod observability;
pub mod scoring;
pub mod services;
pub mod telemetry;
