// Copyright 2025 the Draftboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build a grid from a handful of boxes and print the candidates for a query.

use draftboard_index::{GridConfig, SpatialHashGrid};
use kurbo::Rect;

fn main() {
    let mut grid = SpatialHashGrid::with_config(GridConfig::default().with_cell_size(100.0));
    for i in 0..10_u32 {
        let x = f64::from(i) * 60.0;
        grid.insert(i, Rect::new(x, 0.0, x + 50.0, 50.0));
    }
    grid.insert_without_bounds(99);

    let query = Rect::new(120.0, 10.0, 130.0, 20.0);
    for c in grid.query(query) {
        println!("slot {} item {} bounds {:?}", c.slot, c.item, c.bounds);
    }
    println!("{:?}", grid.stats());
}
