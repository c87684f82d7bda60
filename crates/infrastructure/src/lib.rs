//! Ferrous Rewrite Infrastructure Layer
pub mod dns;
