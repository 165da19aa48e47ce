//! Optional modules and third-party integrations

pub mod integrations;
