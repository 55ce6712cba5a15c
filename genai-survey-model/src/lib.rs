//! Data model for the generative-AI ethics survey report.
//!
//! Three fixed Likert-scale datasets (one per survey question) collected
//! from an 18-student class. Everything here is a compile-time constant;
//! the crate exposes read access and a few derived shares, nothing else.

pub mod question;
pub mod score;
