// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform spatial hash grid with a fallback bucket.
//!
//! Items are bucketed into square cells by their bounding rectangle and
//! queries touch only the cells overlapping the query region. Items whose
//! bounds cannot be bucketed live in a fallback list that every query scans
//! in full, so they stay reachable.

use alloc::vec::Vec;
use core::fmt::Debug;

use hashbrown::HashMap;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::config::GridConfig;

/// Integer coordinates of a grid cell.
pub type CellKey = (i32, i32);

/// Map a model coordinate to a cell coordinate along one axis.
///
/// Rounds towards −∞ and saturates to the `i32` range. `value` must not be NaN.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Grid cell indices are intentionally i32; out-of-range values are saturated."
)]
#[inline]
pub fn cell_coord(value: f64, cell_size: f64) -> i32 {
    debug_assert!(cell_size > 0.0, "grid cell_size must be strictly positive");
    debug_assert!(!value.is_nan(), "cell coordinates are undefined for NaN");
    let t = value / cell_size;
    let coord = t as i32;

    // Round towards -∞ (the cast above has already truncated).
    if t < 0.0 && f64::from(coord) > t {
        coord.saturating_sub(1)
    } else {
        coord
    }
}

/// Why an item was placed in the fallback bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FallbackReason {
    /// The item was inserted without bounds.
    NoBounds,
    /// At least one bound was NaN or infinite.
    NonFinite,
    /// The bounds have zero width or zero height.
    ZeroArea,
    /// The bounds cover more cells than
    /// [`GridConfig::max_cells_per_item`] allows.
    TooManyCells,
}

/// A query candidate: an item whose cells (or fallback membership) matched.
///
/// Candidates are a coarse pre-filter. Callers still need an exact
/// geometric test.
#[derive(Debug)]
pub struct Candidate<'a, I> {
    /// Insertion slot of the item; slots grow in insertion order.
    pub slot: usize,
    /// The stored item.
    pub item: &'a I,
    /// The bounds given at insertion, if any.
    pub bounds: Option<Rect>,
}

impl<I> Clone for Candidate<'_, I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I> Copy for Candidate<'_, I> {}

/// Occupancy counters for a [`SpatialHashGrid`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    /// Total number of items.
    pub items: usize,
    /// Items reachable through cells.
    pub indexed: usize,
    /// Items in the fallback bucket.
    pub fallback: usize,
    /// Number of non-empty cells.
    pub cells: usize,
    /// Size of the fullest cell bucket.
    pub max_bucket: usize,
}

#[derive(Clone, Debug)]
struct Entry<I> {
    item: I,
    bounds: Option<Rect>,
    fallback: Option<FallbackReason>,
}

#[derive(Clone, Debug, Default)]
struct Cell {
    slots: SmallVec<[usize; 8]>,
}

/// Inclusive range of cells covered by a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CellRange {
    ix0: i32,
    ix1: i32,
    iy0: i32,
    iy1: i32,
}

impl CellRange {
    fn count(&self) -> u64 {
        let w = (i64::from(self.ix1) - i64::from(self.ix0) + 1).unsigned_abs();
        let h = (i64::from(self.iy1) - i64::from(self.iy0) + 1).unsigned_abs();
        w.saturating_mul(h)
    }

    fn contains(&self, (ix, iy): CellKey) -> bool {
        self.ix0 <= ix && ix <= self.ix1 && self.iy0 <= iy && iy <= self.iy1
    }

    fn keys(self) -> impl Iterator<Item = CellKey> {
        (self.ix0..=self.ix1).flat_map(move |ix| (self.iy0..=self.iy1).map(move |iy| (ix, iy)))
    }
}

/// Uniform grid over model space that returns candidate items for a region.
///
/// The grid is built in one pass and queried; it does not support removal
/// or update. Every inserted item is reachable exactly once, either through
/// the cells its bounds overlap or through the fallback bucket.
///
/// ```
/// use kurbo::Rect;
/// use draftboard_index::SpatialHashGrid;
///
/// let mut grid = SpatialHashGrid::new();
/// grid.insert("a", Rect::new(0.0, 0.0, 10.0, 10.0));
/// grid.insert("far", Rect::new(5000.0, 5000.0, 5010.0, 5010.0));
/// grid.insert_without_bounds("unknown");
///
/// let hits: Vec<_> = grid
///     .query(Rect::new(4.0, 4.0, 6.0, 6.0))
///     .map(|c| *c.item)
///     .collect();
/// assert_eq!(hits, ["a", "unknown"]);
/// ```
pub struct SpatialHashGrid<I> {
    config: GridConfig,
    cells: HashMap<CellKey, Cell>,
    entries: Vec<Entry<I>>,
    fallback: Vec<usize>,
}

impl<I> Debug for SpatialHashGrid<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpatialHashGrid")
            .field("cell_size", &self.config.cell_size)
            .field("items", &self.entries.len())
            .field("fallback", &self.fallback.len())
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}

impl<I> Default for SpatialHashGrid<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> SpatialHashGrid<I> {
    /// Create an empty grid with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    /// Create an empty grid with an explicit configuration.
    pub fn with_config(config: GridConfig) -> Self {
        Self {
            config: config.sanitized(),
            cells: HashMap::new(),
            entries: Vec::new(),
            fallback: Vec::new(),
        }
    }

    /// Create an empty grid with room for `n` items.
    pub fn with_capacity(config: GridConfig, n: usize) -> Self {
        let mut grid = Self::with_config(config);
        grid.entries.reserve(n);
        grid
    }

    /// The effective configuration.
    pub fn config(&self) -> GridConfig {
        self.config
    }

    /// Insert an item with its bounding rectangle and return its slot.
    ///
    /// The rectangle is normalized first. Bounds that are non-finite, have
    /// zero area, or cover too many cells send the item to the fallback
    /// bucket.
    pub fn insert(&mut self, item: I, bounds: Rect) -> usize {
        let slot = self.entries.len();
        match self.classify(bounds) {
            Ok(range) => {
                for key in range.keys() {
                    self.cells.entry(key).or_default().slots.push(slot);
                }
                self.entries.push(Entry {
                    item,
                    bounds: Some(bounds),
                    fallback: None,
                });
            }
            Err(reason) => {
                tracing::trace!(slot, ?reason, "grid item routed to fallback bucket");
                self.push_fallback(item, Some(bounds), reason);
            }
        }
        slot
    }

    /// Insert an item whose bounds are unknown and return its slot.
    ///
    /// The item is returned by every query.
    pub fn insert_without_bounds(&mut self, item: I) -> usize {
        let slot = self.entries.len();
        self.push_fallback(item, None, FallbackReason::NoBounds);
        slot
    }

    /// Returns candidates for `region`, each item at most once, in insertion order.
    ///
    /// The result holds every item whose cells overlap `region` and every
    /// fallback item. A zero-area region still maps to one cell. A region
    /// with non-finite coordinates only yields fallback items.
    pub fn query(&self, region: Rect) -> impl Iterator<Item = Candidate<'_, I>> + '_ {
        let mut slots = Vec::new();
        self.visit(region, |slot| slots.push(slot));
        slots.into_iter().map(move |slot| self.candidate(slot))
    }

    /// Visit candidate slots for `region` in insertion order.
    pub fn visit<F: FnMut(usize)>(&self, region: Rect, mut f: F) {
        let mut slots: Vec<usize> = Vec::new();

        // Check before normalizing: `abs` would quietly drop a NaN coordinate.
        if is_finite(&region) {
            let range = self.cell_range(&region.abs());
            // A huge query range may touch far more cells than are occupied.
            if range.count() > self.cells.len() as u64 {
                for (key, cell) in &self.cells {
                    if range.contains(*key) {
                        slots.extend_from_slice(&cell.slots);
                    }
                }
            } else {
                for key in range.keys() {
                    if let Some(cell) = self.cells.get(&key) {
                        slots.extend_from_slice(&cell.slots);
                    }
                }
            }
        } else {
            tracing::trace!("non-finite grid query, scanning fallback bucket only");
        }

        slots.extend_from_slice(&self.fallback);
        slots.sort_unstable();
        slots.dedup();
        for slot in slots {
            f(slot);
        }
    }

    /// Returns the item stored at `slot`.
    pub fn get(&self, slot: usize) -> Option<&I> {
        self.entries.get(slot).map(|e| &e.item)
    }

    /// Returns why the item at `slot` is in the fallback bucket, if it is.
    pub fn fallback_reason(&self, slot: usize) -> Option<FallbackReason> {
        self.entries.get(slot).and_then(|e| e.fallback)
    }

    /// Iterate all items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &I> + '_ {
        self.entries.iter().map(|e| &e.item)
    }

    /// Total number of items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the grid holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of items reachable through cells.
    pub fn indexed_len(&self) -> usize {
        self.entries.len() - self.fallback.len()
    }

    /// Number of items in the fallback bucket.
    pub fn fallback_len(&self) -> usize {
        self.fallback.len()
    }

    /// Number of non-empty cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Remove all items, keeping the configuration.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.entries.clear();
        self.fallback.clear();
    }

    /// Occupancy counters.
    pub fn stats(&self) -> GridStats {
        GridStats {
            items: self.entries.len(),
            indexed: self.indexed_len(),
            fallback: self.fallback.len(),
            cells: self.cells.len(),
            max_bucket: self
                .cells
                .values()
                .map(|c| c.slots.len())
                .max()
                .unwrap_or(0),
        }
    }

    fn push_fallback(&mut self, item: I, bounds: Option<Rect>, reason: FallbackReason) {
        self.fallback.push(self.entries.len());
        self.entries.push(Entry {
            item,
            bounds,
            fallback: Some(reason),
        });
    }

    fn candidate(&self, slot: usize) -> Candidate<'_, I> {
        let entry = &self.entries[slot];
        Candidate {
            slot,
            item: &entry.item,
            bounds: entry.bounds,
        }
    }

    fn classify(&self, bounds: Rect) -> Result<CellRange, FallbackReason> {
        if !is_finite(&bounds) {
            return Err(FallbackReason::NonFinite);
        }
        let bounds = bounds.abs();
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            return Err(FallbackReason::ZeroArea);
        }
        let range = self.cell_range(&bounds);
        if range.count() > self.config.max_cells_per_item as u64 {
            return Err(FallbackReason::TooManyCells);
        }
        Ok(range)
    }

    fn cell_range(&self, rect: &Rect) -> CellRange {
        let size = self.config.cell_size;
        CellRange {
            ix0: cell_coord(rect.x0, size),
            ix1: cell_coord(rect.x1, size),
            iy0: cell_coord(rect.y0, size),
            iy1: cell_coord(rect.y1, size),
        }
    }
}

fn is_finite(rect: &Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}
