//! Entity Module

pub mod credential;
pub mod identity;

pub use credential::Credential;
pub use identity::Identity;
