// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lookup table from [`ShapeKind`] to [`BoundsProvider`].

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::provider::BoundsProvider;
use crate::shape::{PointHit, Shape, ShapeKind};

/// Error returned when building a [`BoundsRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A provider for this kind was already registered.
    DuplicateProvider(ShapeKind),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateProvider(kind) => {
                write!(f, "a bounds provider for {kind} is already registered")
            }
        }
    }
}

impl core::error::Error for RegistryError {}

/// At most one [`BoundsProvider`] per [`ShapeKind`].
///
/// Hit-testing a shape whose kind has no provider is a programming error:
/// [`get`](Self::get) and the dispatch helpers panic in that case. Use
/// [`try_get`](Self::try_get) to probe.
pub struct BoundsRegistry<S: Shape> {
    providers: HashMap<ShapeKind, Box<dyn BoundsProvider<S>>>,
}

impl<S: Shape> Default for BoundsRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Shape> fmt::Debug for BoundsRegistry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<ShapeKind> = self.providers.keys().copied().collect();
        kinds.sort_unstable();
        f.debug_struct("BoundsRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

impl<S: Shape> BoundsRegistry<S> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Creates a registry holding every built-in provider.
    pub fn with_defaults() -> Self {
        let mut providers = HashMap::new();
        for provider in crate::bounds::default_providers() {
            providers.insert(provider.target_kind(), provider);
        }
        Self { providers }
    }

    /// Builds a registry from `providers`, rejecting duplicate kinds.
    pub fn from_providers(
        providers: impl IntoIterator<Item = Box<dyn BoundsProvider<S>>>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        for provider in providers {
            registry.register_boxed(provider)?;
        }
        Ok(registry)
    }

    /// Adds `provider` under its [`target_kind`](BoundsProvider::target_kind).
    pub fn register<P>(&mut self, provider: P) -> Result<(), RegistryError>
    where
        P: BoundsProvider<S> + 'static,
    {
        self.register_boxed(Box::new(provider))
    }

    /// Adds an already boxed provider.
    pub fn register_boxed(
        &mut self,
        provider: Box<dyn BoundsProvider<S>>,
    ) -> Result<(), RegistryError> {
        let kind = provider.target_kind();
        if self.providers.contains_key(&kind) {
            return Err(RegistryError::DuplicateProvider(kind));
        }
        tracing::trace!(%kind, "registered bounds provider");
        self.providers.insert(kind, provider);
        Ok(())
    }

    /// The provider for `kind`.
    ///
    /// # Panics
    ///
    /// Panics if no provider is registered for `kind`.
    #[track_caller]
    pub fn get(&self, kind: ShapeKind) -> &dyn BoundsProvider<S> {
        match self.providers.get(&kind) {
            Some(provider) => provider.as_ref(),
            None => panic!("no bounds provider registered for shape kind {kind}"),
        }
    }

    /// The provider for `kind`, if any.
    pub fn try_get(&self, kind: ShapeKind) -> Option<&dyn BoundsProvider<S>> {
        self.providers.get(&kind).map(|p| p.as_ref())
    }

    /// Whether a provider is registered for `kind`.
    pub fn is_registered(&self, kind: ShapeKind) -> bool {
        self.providers.contains_key(&kind)
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Dispatches [`BoundsProvider::contains`] on `shape`'s provider.
    #[track_caller]
    pub fn contains(&self, shape: &S, target: Point, radius: f64, scale: f64) -> bool {
        self.get(shape.kind())
            .contains(shape, target, radius, scale, self)
    }

    /// Dispatches [`BoundsProvider::overlaps`] on `shape`'s provider.
    #[track_caller]
    pub fn overlaps(&self, shape: &S, target: Rect, radius: f64, scale: f64) -> bool {
        self.get(shape.kind())
            .overlaps(shape, target, radius, scale, self)
    }

    /// Dispatches [`BoundsProvider::try_get_point`] on `shape`'s provider.
    #[track_caller]
    pub fn try_get_point<'a>(
        &self,
        shape: &'a S,
        target: Point,
        radius: f64,
        scale: f64,
    ) -> Option<PointHit<'a, S>> {
        self.get(shape.kind())
            .try_get_point(shape, target, radius, scale, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::{LineBounds, PointBounds};
    use crate::shape::PointsUnsupported;
    use alloc::format;

    struct Blob;

    impl Shape for Blob {
        fn kind(&self) -> ShapeKind {
            ShapeKind::Custom(3)
        }
        fn get_points(&self, _out: &mut Vec<Point>) -> Result<(), PointsUnsupported> {
            Err(PointsUnsupported)
        }
    }

    #[test]
    fn duplicates_are_rejected() {
        let mut registry = BoundsRegistry::<Blob>::new();
        registry.register(LineBounds).unwrap();
        registry.register(PointBounds).unwrap();
        assert_eq!(
            registry.register(LineBounds),
            Err(RegistryError::DuplicateProvider(ShapeKind::Line))
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn defaults_cover_every_builtin_kind() {
        let registry = BoundsRegistry::<Blob>::with_defaults();
        assert_eq!(registry.len(), 11);
        assert!(registry.is_registered(ShapeKind::Group));
        assert!(registry.try_get(ShapeKind::Custom(3)).is_none());
        assert_eq!(
            registry.get(ShapeKind::Arc).target_kind(),
            ShapeKind::Arc
        );
    }

    #[test]
    #[should_panic(expected = "no bounds provider registered for shape kind Custom(3)")]
    fn dispatch_on_unregistered_kind_panics() {
        let registry = BoundsRegistry::<Blob>::with_defaults();
        registry.contains(&Blob, Point::ZERO, 1.0, 1.0);
    }

    #[test]
    fn error_message_names_the_kind() {
        let err = RegistryError::DuplicateProvider(ShapeKind::Ellipse);
        assert_eq!(
            format!("{err}"),
            "a bounds provider for Ellipse is already registered"
        );
    }
}
