//!
//! Catena: ordered collection transformations with depth-aware dispatch.
//! This library provides an insertion-ordered key/value container and a large
//! catalogue of operations over it, any of which can be applied N levels deep.
//!
//! ## Core Concepts
//!
//! * **Containers (`container::Container`)**: An insertion-ordered mapping from keys (integer or string) to values, doubling as list and associative map. Values may be containers themselves.
//! * **Operations (`ops`)**: Plain functions from a container (plus parameters) to a new container, a scalar, or, for the mutating primitives, an extracted value.
//! * **Depth dispatch (`dispatch`)**: Applies any operation to every container found N levels down, rebuilding the surrounding structure or collecting extracted values.
//! * **Key casing (`casing`)**: Splits identifier keys into words and renders them in six casing conventions.
//! * **Chain (`chain::Chain`)**: A stateful facade holding one container, where `elems()` routes the next call one level deeper.
//!
//! ## Example
//!
//! ```
//! use catena::{Chain, container};
//!
//! let mut chain = Chain::new(container! {
//!     "a" => container! {"user_id" => 1},
//!     "b" => container! {"user_id" => 2},
//! });
//! chain.elems().keys_to_camel_case()?;
//! assert_eq!(
//!     chain.container(),
//!     &container! {
//!         "a" => container! {"userId" => 1},
//!         "b" => container! {"userId" => 2},
//!     }
//! );
//! # Ok::<(), catena::Error>(())
//! ```

pub mod casing;
pub mod chain;
pub mod container;
pub mod dispatch;
pub mod errors;
pub mod ops;

/// Re-export the core types for easier access.
pub use casing::KeyCase;
pub use chain::Chain;
pub use container::{Container, Key, Number, Value};
pub use errors::CollectionError;
pub use ops::{Absent, Group, JsonOptions, Locator};

/// Result type used throughout the Catena library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Catena library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured errors from the container and operation modules
    #[error(transparent)]
    Collection(errors::CollectionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Collection(_) => "collection",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates an absent key or position.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error indicates misuse by the caller.
    pub fn is_usage_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_usage_error(),
            _ => false,
        }
    }

    /// Check if this error is related to type mismatches.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Collection(err) => err.is_type_error(),
            _ => false,
        }
    }

    /// Check if this error is related to JSON encoding or decoding.
    pub fn is_serialization_error(&self) -> bool {
        match self {
            Error::Serialize(_) => true,
            Error::Collection(err) => err.is_json_error(),
        }
    }
}
