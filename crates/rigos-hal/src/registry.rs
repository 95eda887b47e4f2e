//! [`ResourceRegistry`] – generic name-keyed directory of hardware handles.
//!
//! Each hardware interface owns one registry per handle kind. Names are
//! unique per interface instance; registering a name twice is a configuration
//! error, never a silent overwrite. Lookup returns a clone of the stored
//! handle so callers can keep it across control cycles without borrowing the
//! registry.

use std::collections::HashMap;

use tracing::{debug, warn};

use rigos_types::HalError;

/// Name-keyed storage for hardware handles of one kind.
///
/// [`names`][ResourceRegistry::names] reflects insertion order, so listings
/// are deterministic within a single process run.
#[derive(Debug)]
pub struct ResourceRegistry<T> {
    /// Label of the owning interface, embedded in error messages.
    interface: String,
    handles: HashMap<String, T>,
    order: Vec<String>,
}

impl<T: Clone> ResourceRegistry<T> {
    /// Create an empty registry for the interface labeled `interface`.
    pub fn new(interface: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            handles: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// All registered names, in registration order.
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Number of registered handles.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// `true` if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Store `handle` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::DuplicateResource`] if `name` is already
    /// registered; the existing handle is left untouched.
    pub fn insert(&mut self, name: impl Into<String>, handle: T) -> Result<(), HalError> {
        let name = name.into();
        if self.handles.contains_key(&name) {
            warn!(interface = %self.interface, name = %name, "duplicate resource registration");
            return Err(HalError::DuplicateResource {
                interface: self.interface.clone(),
                name,
            });
        }
        debug!(interface = %self.interface, name = %name, "registered resource");
        self.order.push(name.clone());
        self.handles.insert(name, handle);
        Ok(())
    }

    /// Return a clone of the handle registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`HalError::ResourceNotFound`] if no handle is registered
    /// under `name`. A miss does not change registry state.
    pub fn get(&self, name: &str) -> Result<T, HalError> {
        self.handles.get(name).cloned().ok_or_else(|| {
            warn!(interface = %self.interface, name = %name, "resource lookup miss");
            HalError::ResourceNotFound {
                interface: self.interface.clone(),
                name: name.to_string(),
            }
        })
    }
}
