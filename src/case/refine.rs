use super::{Axis, Case};
use crate::grid::{prime_comb_str, prime_factors, SmoothOptions};
use crate::prelude::*;

use log::info;
use std::fmt;

/// how a refined axis is resampled before it is stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resample {
    /// keep the connected segments as they are
    None,
    /// resample to exactly this many points
    Count(usize),
    /// resample to the next cell count that factors over these primes
    PrimeComb(Vec<usize>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefineOptions {
    /// growth rate of the buffer between 0 and the core
    pub lgrow: f64,
    /// growth rate of the buffer between the core and the end of the axis
    pub rgrow: f64,
    pub smooth_iter: usize,
    pub resample: Resample,
}

impl Default for RefineOptions {
    fn default() -> Self {
        Self {
            lgrow: 1.05,
            rgrow: 1.05,
            smooth_iter: 10,
            resample: Resample::PrimeComb(vec![2, 3]),
        }
    }
}

/// Stretch `axis` around the region `[x1, x2]` of `keypoints = [x1, x2, xout]`.
///
/// The core `[x1, x2]` is spaced uniformly by `dx`. Buffers grow geometrically from it
/// towards 0 and `xout`, are smoothed into the core, and the result is resampled per
/// `options.resample`. The axis grid is switched on and holds the nodes; the domain
/// is marked non-uniform along `axis` with matching point count and extent.
pub fn refine_grid(
    case: &mut Case,
    axis: Axis,
    keypoints: [f64; 3],
    dx: f64,
    options: &RefineOptions,
) -> Result<(), Error> {
    let [x1, x2, xout] = keypoints;
    info!(
        "refine {axis} axis keypoints [0, {x1}, {x2}, {xout}], left right growth rate [{}, {}]",
        options.lgrow, options.rgrow
    );

    if !(dx > 0.0 && x2 >= x1) {
        return Err(error::Growth::new(x2 - x1, dx).into());
    }

    // a core narrower than `dx` still spans one cell
    let mut core = Segment::uniform_dx(x1, x2, dx);
    if core.npoint() < 2 {
        core = Segment::uniform_n(x1, x1 + dx, 1);
    }
    let mut left = core.grow_toward_left(0.0, options.lgrow)?;
    let mut right = core.grow_toward_right(xout, options.rgrow)?;

    let smooth = SmoothOptions::iterations(options.smooth_iter);
    let (outer, inner) = (left.lslope(), core.lslope());
    left.smooth(Some(outer), Some(inner), smooth);
    let (inner, outer) = (core.rslope(), right.rslope());
    right.smooth(Some(inner), Some(outer), smooth);

    let mut seg = connect_segs(&[left, core, right]);
    seg = match &options.resample {
        Resample::None => seg,
        Resample::Count(n) => seg.resample(*n),
        Resample::PrimeComb(factors) => seg.resample_prime_comb(factors),
    };

    let npoint = seg.npoint();
    let end = seg.end();
    info!("{axis} axis refined to {npoint} points ending at {end}");

    case.grid_mut(axis).activate().nodes.set(seg)?;

    let domain = &mut case.domain;
    domain.set(&format!("{axis}gridUnif"), "nonuniform")?;
    domain.set(&format!("n{axis}"), npoint)?;
    domain.set(&format!("{axis}out"), end)?;
    Ok(())
}

/// `n` uniformly spaced points from 0 to `l` along `axis`
pub fn uniform_grid_n(case: &mut Case, axis: Axis, l: f64, n: usize) -> Result<(), Error> {
    let domain = &mut case.domain;
    domain.set(&format!("{axis}gridUnif"), "uniform")?;
    domain.set(&format!("n{axis}"), n)?;
    domain.set(&format!("{axis}out"), l)
}

/// uniform spacing of about `dx` from 0 to `l`, `floor(l / dx) + 1` points
pub fn uniform_grid_dx(case: &mut Case, axis: Axis, l: f64, dx: f64) -> Result<(), Error> {
    let cells = (l / dx).floor();
    if !(cells.is_finite() && cells >= 0.0 && dx > 0.0) {
        return Err(error::Growth::new(l, dx).into());
    }
    uniform_grid_n(case, axis, l, cells as usize + 1)
}

/// Make the case two dimensional: three uniform points spaced `dz` along z.
pub fn grid_2d(case: &mut Case, dz: f64) -> Result<(), Error> {
    let domain = &mut case.domain;
    domain.set("nDim", 2)?;
    domain.set("zgridUnif", "uniform")?;
    domain.set("nz", 3)?;
    domain.set("zout", dz * 2.0)
}

/// Node and cell counts of a case's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStats {
    /// nodes along x, y and z
    pub nodes: [usize; 3],
    pub dim2: bool,
}

impl GridStats {
    pub fn cells(&self) -> [usize; 3] {
        self.nodes.map(|n| n.saturating_sub(1))
    }

    pub fn total_nodes(&self) -> usize {
        self.nodes.iter().product()
    }

    pub fn total_cells(&self) -> usize {
        self.cells().iter().product()
    }
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [nx, ny, _] = self.nodes;
        let [nxc, nyc, _] = self.cells();

        writeln!(
            f,
            "Grid Stat: Total Cells = {}, Total Nodes = {}",
            thousands(self.total_cells()),
            thousands(self.total_nodes())
        )?;
        if self.dim2 {
            writeln!(
                f,
                "Grid Stat: Total 2D Cells = {}, Total 2D Nodes = {}",
                thousands(nxc * nyc),
                thousands(nx * ny)
            )?;
        }

        for ((axis, n), nc) in Axis::ALL.iter().zip(self.nodes).zip(self.cells()) {
            let name = axis.to_string().to_uppercase();
            writeln!(
                f,
                "Grid Stat: {name} Nodes = {:<8} {name} Segs = {:<8} = {}",
                format!("{n},"),
                nc,
                prime_comb_str(&prime_factors(nc))
            )?;
        }

        Ok(())
    }
}

fn axis_nodes(case: &Case, axis: Axis) -> Result<usize, Error> {
    let domain = &case.domain;
    let (n, unif) = match axis {
        Axis::X => (&domain.nx, &domain.xgrid_unif),
        Axis::Y => (&domain.ny, &domain.ygrid_unif),
        Axis::Z => (&domain.nz, &domain.zgrid_unif),
    };

    // 1 is uniform, the count lives in the domain
    if unif.as_i64()? == 1 {
        return Ok(n.as_i64()?.max(0) as usize);
    }

    let grid = case.grid(axis).get()?;
    Ok(grid.nodes.shape().map_or(0, |(rows, _)| rows))
}

/// Count the nodes and cells along every axis, reading uniform axes from the domain and
/// stretched ones from their grid. A stretched axis without an active grid is an error.
pub fn grid_stats(case: &Case) -> Result<GridStats, Error> {
    let stats = GridStats {
        nodes: [
            axis_nodes(case, Axis::X)?,
            axis_nodes(case, Axis::Y)?,
            axis_nodes(case, Axis::Z)?,
        ],
        dim2: case.domain.n_dim.as_i64()? == 2,
    };

    for line in stats.to_string().lines() {
        info!("{line}");
    }

    Ok(stats)
}
