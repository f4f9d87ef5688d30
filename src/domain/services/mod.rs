//! # Domain Services
//!
//! 命名に関するビジネスルール

pub mod blob_naming;
pub mod container_naming;
