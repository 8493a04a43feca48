//! Top-level pages.

pub mod signup;
