//! Backend REST contract: wire types, URL builders, and HTTP helpers.

pub mod api;
pub mod types;
pub mod url;
