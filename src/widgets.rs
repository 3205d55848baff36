//! Reusable drawing helpers

pub mod popup;
