//! Server entity models.

pub mod contact;
pub mod group;
pub mod session;
