//! Core library components.
//!
//! Password generation and validation, key management, the encrypted
//! password store and secure erasure.

pub mod charset;
pub mod cipher;
pub mod config;
pub mod constants;
pub mod eraser;
pub mod generator;
pub mod keystore;
pub mod policy;
pub mod store;
pub mod validation;
