//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing and verification (Argon2id)
//! - Secure random bytes for secrets

pub mod crypto;
pub mod password;
