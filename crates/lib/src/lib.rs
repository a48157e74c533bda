//!
//! Assoc: ordered associative containers with array-style and object-style access.
//!
//! ## Core Concepts
//!
//! * **Ordered maps (`map::OrderedMap`)**: Mappings from integer or string keys to values that
//!   remember insertion order. Text keys that spell a canonical integer are stored as integers
//!   (`map::to_key`), so `"5"` and `5` address the same entry.
//! * **Values (`map::Value`)**: Scalars (null, bool, int, float, text) and nested containers.
//! * **Operations (`arrays`)**: Free functions over ordered maps: retrieval by key or path,
//!   mutable references with auto-vivification, flattening, recursive merging, normalization,
//!   pattern filtering, and position-aware insert/rename/remove.
//! * **Dual views (`view::DualView`)**: A wrapper that addresses one ordered map both as an
//!   array (`view["key"]`) and as an object (`view.member("key")`), recursively wrapping nested
//!   maps.
//!
//! ```
//! use assoc::{arrays, omap, view::DualView};
//!
//! let mut map = omap! { "first" => 10, "second" => 20 };
//! arrays::insert_after(&mut map, "first", omap! { "hello" => "world" });
//! assert_eq!(arrays::get_key_offset(&map, "hello"), Some(1));
//!
//! let view = DualView::from(omap! { "inner" => omap! { "a" => "b" } });
//! assert_eq!(view["inner"]["a"], "b");
//! assert_eq!(view.member("inner")["a"], "b");
//! ```

pub mod arrays;
pub mod map;
pub mod view;

/// Result type used throughout the Assoc library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Assoc library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured map errors from the map module
    #[error(transparent)]
    Map(map::MapError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Map(_) => "map",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a key or path was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error reports a malformed pattern.
    pub fn is_pattern_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_pattern_error(),
            _ => false,
        }
    }

    /// Check if this error reports traversal through a scalar.
    pub fn is_not_a_map(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_not_a_map(),
            _ => false,
        }
    }

    /// Check if this error is type-related.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Map(map_err) => map_err.is_type_error() || map_err.is_invalid_key(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
