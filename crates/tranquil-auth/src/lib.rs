//! tranquil-auth
//!
//! Verification of clinician access tokens. Sign-in itself is delegated to
//! the external identity provider; this crate only checks the JWTs it issues.

pub mod error;
pub mod jwt;
