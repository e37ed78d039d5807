//! Data Factory linked service models in Rust
//!
//! This crate provides typed representations of the linked services of a data factory,
//! the connection descriptions a factory uses to reach external systems, together with
//! their polymorphic JSON encoding. It includes:
//!
//! - A generic linked service envelope and the connector specific properties of MongoDB,
//!   Salesforce, SAP, SaaS applications, relational databases, file servers and web endpoints
//! - The `LinkedService` sum type, decoded by its `type` discriminator
//! - The `SecretBase` family of secrets, inline or stored in Azure Key Vault
//! - The resource envelope returned by the management API
//!
//! The crate is organized into several modules:
//!
//! - `spec`: Linked service, secret and reference types
//! - `error`: Error types and handling
//! - `util`: Discriminator helpers shared by the polymorphic decoders
//!
pub mod error;
pub mod spec;
pub mod util;

pub use spec::*;
