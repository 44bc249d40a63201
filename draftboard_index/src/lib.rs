// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draftboard Index: a uniform spatial hash grid for hit-testing candidates.
//!
//! [`SpatialHashGrid`] buckets items into square cells by their bounding
//! rectangle so that a point or rectangle query only touches the items that
//! live near it, instead of scanning every item.
//!
//! - Queries return a coarse candidate set. Items may not truly intersect the
//!   query region; callers run their own exact geometric test.
//! - Items whose bounds are unknown, non-finite, zero-area, or too large for
//!   the configured cell budget go to a **fallback bucket** that every query
//!   returns. No item is ever unreachable.
//! - Candidates come back once each, in insertion order. Callers that insert
//!   in z-order get a deterministic "first match wins" traversal for free.
//!
//! The grid is meant to be built for a batch of queries and dropped; it has no
//! update or removal API.
//!
//! # Example
//!
//! ```rust
//! use kurbo::Rect;
//! use draftboard_index::{GridConfig, SpatialHashGrid};
//!
//! let mut grid = SpatialHashGrid::with_config(GridConfig::default().with_cell_size(64.0));
//! grid.insert(1_u32, Rect::new(0.0, 0.0, 200.0, 40.0));
//! grid.insert(2_u32, Rect::new(500.0, 500.0, 520.0, 520.0));
//!
//! // A zero-area line segment cannot be bucketed; it is still returned.
//! grid.insert(3_u32, Rect::new(10.0, 300.0, 90.0, 300.0));
//!
//! let hits: Vec<u32> = grid
//!     .query(Rect::new(100.0, 10.0, 110.0, 20.0))
//!     .map(|c| *c.item)
//!     .collect();
//! assert_eq!(hits, [1, 3]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod grid;

pub use config::{DEFAULT_CELL_SIZE, DEFAULT_MAX_CELLS_PER_ITEM, GridConfig};
pub use grid::{Candidate, CellKey, FallbackReason, GridStats, SpatialHashGrid, cell_coord};
