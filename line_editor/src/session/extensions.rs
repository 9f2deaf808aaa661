// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{any::{Any, TypeId},
          collections::HashMap,
          fmt::{Debug, Formatter}};

/// A typed slot in [`Extensions`]. The key is a (usually zero sized) type, so two
/// modules can't collide by accident, and every slot has a well defined value before
/// anything is stored in it.
///
/// ```rust
/// use r3bl_line_editor::{ExtensionKey, Extensions};
///
/// struct KillCount;
/// impl ExtensionKey for KillCount {
///     type Value = usize;
///     fn default_value() -> usize { 0 }
/// }
///
/// let mut extensions = Extensions::default();
/// assert_eq!(extensions.get::<KillCount>(), 0);
/// extensions.update::<KillCount>(|it| *it += 2);
/// assert_eq!(extensions.get::<KillCount>(), 2);
/// ```
pub trait ExtensionKey: 'static {
    type Value: Send + 'static;
    fn default_value() -> Self::Value;
}

/// Type erased per session state for commands, keyed by [`ExtensionKey`] types.
#[derive(Default)]
pub struct Extensions {
    map: HashMap<TypeId, Box<dyn Any + Send>>,
}

impl Debug for Extensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extensions")
            .field("len", &self.map.len())
            .finish()
    }
}

impl Extensions {
    /// The stored value, or [`ExtensionKey::default_value`] if nothing is stored yet.
    #[must_use]
    pub fn get<K: ExtensionKey>(&self) -> K::Value
    where
        K::Value: Clone,
    {
        self.map
            .get(&TypeId::of::<K>())
            .and_then(|it| it.downcast_ref::<K::Value>())
            .cloned()
            .unwrap_or_else(K::default_value)
    }

    pub fn set<K: ExtensionKey>(&mut self, value: K::Value) {
        self.map.insert(TypeId::of::<K>(), Box::new(value));
    }

    /// Modify the value in place, starting from the default if nothing is stored yet.
    pub fn update<K: ExtensionKey>(&mut self, f: impl FnOnce(&mut K::Value)) {
        let slot = self
            .map
            .entry(TypeId::of::<K>())
            .or_insert_with(|| Box::new(K::default_value()));
        if let Some(value) = slot.downcast_mut::<K::Value>() {
            f(value);
        }
    }
}
