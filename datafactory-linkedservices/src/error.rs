/*!
Error type for linked service models
*/

use thiserror::Error;

#[derive(Error, Debug)]
/// Linked service error
pub enum Error {
    /// Invalid format
    #[error("{0} doesn't have the right format")]
    InvalidFormat(String),
    /// The payload carries no `type` discriminator
    #[error("{0} payload has no \"type\" discriminator.")]
    MissingDiscriminator(&'static str),
    /// The `type` discriminator is not registered for this polymorphic family
    #[error("Unknown {kind} type \"{found}\".")]
    UnknownDiscriminator {
        /// Polymorphic family that was decoded
        kind: &'static str,
        /// Discriminator found in the payload
        found: String,
    },
    /// A concrete variant was decoded from a payload tagged for another variant
    #[error("Expected type \"{expected}\" but found \"{found}\".")]
    DiscriminatorMismatch {
        /// Discriminator of the target variant
        expected: &'static str,
        /// Discriminator found in the payload
        found: String,
    },
    /// A secret-bearing type property could not be resolved
    #[error("Failed to decode secret field \"{field}\" of {linked_service} linked service: {source}")]
    Secret {
        /// Discriminator of the enclosing linked service
        linked_service: &'static str,
        /// Name of the type property
        field: &'static str,
        /// Resolver error
        #[source]
        source: Box<Error>,
    },
    /// Serde json
    #[error(transparent)]
    JSONSerde(#[from] serde_json::Error),
    /// derive builder
    #[error(transparent)]
    DeriveBuilder(#[from] derive_builder::UninitializedFieldError),
}
