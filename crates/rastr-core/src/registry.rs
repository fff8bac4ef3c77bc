//! The id -> raster store shared across transformation invocations.
//!
//! Every command reads its source out of a [`Registry`] and writes its
//! result back under a (possibly different) id. Keys are unique; `put`
//! under an existing id silently replaces the previous raster. There is no
//! versioning and no default: looking up an absent id is
//! [`Error::NoSuchImage`].
//!
//! The registry has no concurrent-access discipline because the system has
//! exactly one logical thread of control; its lifetime is scoped to one
//! program run and it is passed by reference into the entry points that
//! need it.

use crate::error::{Error, Result};
use crate::raster::Raster;
use std::collections::HashMap;

/// Mapping from string id to owned [`Raster`].
///
/// # Example
///
/// ```
/// use rastr_core::{Raster, Registry};
///
/// let mut registry = Registry::new();
/// registry.put("koala", Raster::new(2, 2).unwrap());
/// assert!(registry.get("koala").is_ok());
/// assert!(registry.get("gibbon").is_err());
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    images: HashMap<String, Raster>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `raster` under `id`, replacing any previous entry.
    pub fn put(&mut self, id: impl Into<String>, raster: Raster) {
        self.images.insert(id.into(), raster);
    }

    /// Returns the raster registered under `id`.
    ///
    /// # Errors
    ///
    /// [`Error::NoSuchImage`] if nothing is registered under `id`.
    pub fn get(&self, id: &str) -> Result<&Raster> {
        self.images.get(id).ok_or_else(|| Error::no_such_image(id))
    }

    /// Returns `true` if an image is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.images.contains_key(id)
    }

    /// Iterates over the registered ids in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(String::as_str)
    }

    /// Number of registered images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` if no images are registered.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
