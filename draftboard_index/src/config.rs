// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Default edge length of a grid cell, in model units.
pub const DEFAULT_CELL_SIZE: f64 = 256.0;

/// Default upper bound on the number of cells a single item may occupy.
pub const DEFAULT_MAX_CELLS_PER_ITEM: usize = 4096;

/// Tuning knobs for [`SpatialHashGrid`](crate::SpatialHashGrid).
///
/// None of these values affect query correctness; they only trade memory for
/// the size of the candidate sets returned by a query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Edge length of a square cell in model units.
    ///
    /// Values that are non-finite or not strictly positive are replaced by
    /// [`DEFAULT_CELL_SIZE`] when the grid is built.
    pub cell_size: f64,
    /// Items whose bounds would cover more cells than this are stored in the
    /// fallback bucket instead.
    ///
    /// This keeps a single enormous item from allocating millions of buckets.
    pub max_cells_per_item: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            max_cells_per_item: DEFAULT_MAX_CELLS_PER_ITEM,
        }
    }
}

impl GridConfig {
    /// Returns a copy of this config with the given cell size.
    #[must_use]
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Returns a copy of this config with the given per-item cell limit.
    #[must_use]
    pub fn with_max_cells_per_item(mut self, max_cells: usize) -> Self {
        self.max_cells_per_item = max_cells;
        self
    }

    /// Replace out-of-range values with usable ones.
    pub(crate) fn sanitized(self) -> Self {
        let cell_size = if self.cell_size.is_finite() && self.cell_size > 0.0 {
            self.cell_size
        } else {
            tracing::debug!(
                cell_size = self.cell_size,
                "invalid grid cell size, using default"
            );
            DEFAULT_CELL_SIZE
        };
        Self {
            cell_size,
            max_cells_per_item: self.max_cells_per_item.max(1),
        }
    }
}
