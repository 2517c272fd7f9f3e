//! Resource site placement on the isomorphic grid.
//!
//! A plot of side `size` is cut into `site_size` cells. The diamond inscribed
//! in those cells is flattened into a rectangle `span` wide and `span / 2 + 1`
//! tall: the two top corners of the rectangle fall outside the diamond and are
//! folded down into its lower half. Coordinates are drawn over that rectangle
//! in one dimension, so every draw lands on a distinct cell fully inside the
//! diamond and sites can never overlap.

use anchor_lang::prelude::*;

use crate::errors::PlotError;
use crate::generator::{next_rnd, unique_coords, Seed, Site};

pub const DEFAULT_SITE_SIZE: u16 = 2;

/// Cells held back around the center for the landmark (a 2x2 block).
pub const LANDMARK_CELLS: u32 = 4;

pub const SUBTYPES_PER_RESOURCE: u32 = 3;
pub const ELEMENT_TYPE_OFFSET: u32 = 1;
pub const FUEL_TYPE_OFFSET: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IsoGrid {
    pub size: u16,
    pub site_size: u16,
    /// Width of the folded rectangle, in cells. Always even.
    pub span: u32,
    /// Plot-local offset of the diamond's bounding box on both axes.
    pub border: u32,
    pub reserves_landmark: bool,
}

impl IsoGrid {
    pub fn new(size: u16, site_size: u16) -> Result<Self> {
        require!(site_size > 0, PlotError::InvalidSiteSize);

        let cells = (size / site_size) as u32;
        require!(cells >= 4, PlotError::GridTooSmall);

        // Drop the outer ring and any odd column so the diamond folds evenly
        let span = ((cells - 2) >> 1) << 1;
        let border = (size as u32 - (span + 2) * site_size as u32) / 2;

        Ok(Self {
            size,
            site_size,
            span,
            border,
            // The smallest diamond is nothing but its four center cells
            reserves_landmark: span >= 4,
        })
    }

    fn half(&self) -> u32 {
        self.span / 2
    }

    /// Cells in the folded rectangle, landmark block included.
    pub fn cell_count(&self) -> u32 {
        self.span * (1 + self.half())
    }

    /// Number of distinct site positions available.
    pub fn capacity(&self) -> u32 {
        if self.reserves_landmark {
            self.cell_count() - LANDMARK_CELLS
        } else {
            self.cell_count()
        }
    }

    /// One-dimensional indices of the landmark block, ascending.
    fn landmark_cells(&self) -> [u32; 4] {
        let half = self.half();
        let upper = (half - 1) * self.span;
        let lower = half * self.span;
        [upper + half - 1, upper + half, lower + half - 1, lower + half]
    }

    /// Moves a draw that hit the landmark block onto the rectangle's tail,
    /// which lies past `capacity` and is never drawn directly.
    fn relocate(&self, coord: u32) -> u32 {
        if !self.reserves_landmark {
            return coord;
        }
        let capacity = self.capacity();
        let reserved = self.landmark_cells();

        let Some(rank) = reserved
            .iter()
            .filter(|&&cell| cell < capacity)
            .position(|&cell| cell == coord)
        else {
            return coord;
        };

        (capacity..self.cell_count())
            .filter(|cell| !reserved.contains(cell))
            .nth(rank)
            .unwrap_or(coord)
    }

    /// Rectangle position of a one-dimensional index, with the two
    /// out-of-diamond corners folded into the lower half.
    fn fold(&self, coord: u32) -> (u32, u32) {
        let n = self.span;
        let half = self.half();
        let x = coord % n;
        let y = coord / n;

        if 2 * (1 + x + y) < n {
            (x + y + 1, y + half + 1)
        } else if 2 * x > n && 2 * x > 2 * y + n {
            (x - y - 1, y + half + 1)
        } else {
            (x, y)
        }
    }

    /// Plot-local top-left corner of the site drawn at `coord`.
    pub fn place(&self, coord: u32) -> (u16, u16) {
        let (x, y) = self.fold(self.relocate(coord));
        (self.to_plot(x + 1), self.to_plot(y + 1))
    }

    /// Plot-local top-left corner of the 2x2-site landmark block.
    pub fn landmark_anchor(&self) -> Option<(u16, u16)> {
        if !self.reserves_landmark {
            return None;
        }
        let corner = self.to_plot(self.half());
        Some((corner, corner))
    }

    fn to_plot(&self, cell: u32) -> u16 {
        (cell * self.site_size as u32 + self.border) as u16
    }
}

/// Fails unless `element_sites + fuel_sites` fit on a plot of this size.
pub fn check_capacity(element_sites: u8, fuel_sites: u8, size: u16, site_size: u16) -> Result<IsoGrid> {
    let grid = IsoGrid::new(size, site_size)?;
    let total = element_sites as u32 + fuel_sites as u32;
    require!(total <= grid.capacity(), PlotError::GridTooSmall);
    Ok(grid)
}

/// Places `element_sites` element sites followed by `fuel_sites` fuel sites.
///
/// The i-th coordinate in ascending order is paired with the i-th type draw,
/// so element sites take the lowest coordinates.
pub fn place_sites(
    seed: Seed,
    element_sites: u8,
    fuel_sites: u8,
    size: u16,
    site_size: u16,
) -> Result<Vec<Site>> {
    let grid = check_capacity(element_sites, fuel_sites, size, site_size)?;
    let total = element_sites as usize + fuel_sites as usize;

    let (mut seed, coords) = unique_coords(seed, total, grid.capacity())?;

    let mut sites = Vec::with_capacity(total);
    for (i, coord) in coords.into_iter().enumerate() {
        let offset = if i < element_sites as usize {
            ELEMENT_TYPE_OFFSET
        } else {
            FUEL_TYPE_OFFSET
        };
        let (next, type_id) = next_rnd(seed, offset, SUBTYPES_PER_RESOURCE);
        seed = next;

        let (x, y) = grid.place(coord);
        sites.push(Site {
            type_id: type_id as u8,
            x,
            y,
        });
    }

    Ok(sites)
}

/// Landmark block position for a plot, if it has room for one.
pub fn landmark_anchor(size: u16, site_size: u16) -> Option<(u16, u16)> {
    IsoGrid::new(size, site_size).ok()?.landmark_anchor()
}
