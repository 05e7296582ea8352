//! Integration testing module
//!
//! Cross-module demux scenarios:
//! - Open, ingest, and extradata delivery
//! - Self-paced and clock-slaved delivery
//! - Seeking, discontinuities, and position queries

pub mod support;
