use super::find_n_growth_rate;
use crate::prelude::*;

use ndarray::s;
use std::ops::Add;

/// Relaxation parameters of [`Segment::smooth`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothOptions {
    pub iterations: usize,
    /// weight of the smoothed estimate against the current coordinate
    pub relax: f64,
}

impl Default for SmoothOptions {
    fn default() -> Self {
        Self {
            iterations: 5,
            relax: 0.74,
        }
    }
}

impl SmoothOptions {
    pub fn iterations(iterations: usize) -> Self {
        Self {
            iterations,
            ..Default::default()
        }
    }
}

/// A one dimensional run of grid coordinates along an axis.
///
/// Segments are built uniformly or grown geometrically from a neighbour, smoothed, and
/// joined end to end:
///
/// ```
/// use vicar::{connect_segs, Segment};
///
/// let core = Segment::uniform_dx(2.0, 4.0, 0.1);
/// let left = core.grow_toward_left(0.0, 1.1).unwrap();
/// let right = core.grow_toward_right(10.0, 1.1).unwrap();
///
/// let axis = connect_segs(&[left, core, right]);
/// assert_eq!(axis.start(), 0.0);
/// assert_eq!(axis.end(), 10.0);
/// assert!(axis.is_strictly_increasing());
/// ```
///
/// Accessors on the boundary (`start`, `end_dx`, ...) panic when the segment is too
/// short to have them.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    grid: Array1<f64>,
}

impl Segment {
    pub fn new(grid: Array1<f64>) -> Self {
        Self { grid }
    }

    /// Points `start, start + dx, ...` up to and including `end` when it lies on the
    /// spacing, never past it.
    pub fn uniform_dx(start: f64, end: f64, dx: f64) -> Self {
        let count = ((end - start) / dx + 1e-9).floor();
        let npoint = if count.is_finite() && count >= 0.0 {
            count as usize + 1
        } else {
            0
        };

        Self::new(Array1::from_shape_fn(npoint, |i| start + i as f64 * dx))
    }

    /// `n` equal cells from `start` to `end`, so `n + 1` points
    pub fn uniform_n(start: f64, end: f64, n: usize) -> Self {
        Self::new(Array1::linspace(start, end, n + 1))
    }

    pub fn grid(&self) -> &Array1<f64> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Array1<f64> {
        &mut self.grid
    }

    pub fn into_grid(self) -> Array1<f64> {
        self.grid
    }

    pub fn npoint(&self) -> usize {
        self.grid.len()
    }

    pub fn start(&self) -> f64 {
        self.grid[0]
    }

    pub fn end(&self) -> f64 {
        self.grid[self.npoint() - 1]
    }

    pub fn start_dx(&self) -> f64 {
        self.grid[1] - self.grid[0]
    }

    pub fn end_dx(&self) -> f64 {
        let n = self.npoint();
        self.grid[n - 1] - self.grid[n - 2]
    }

    pub fn is_strictly_increasing(&self) -> bool {
        self.grid.windows(2).into_iter().all(|pair| pair[1] > pair[0])
    }

    fn check_growable(&self) -> Result<(), Error> {
        if self.npoint() < 2 {
            return Err(Error::ShortSegment(self.npoint()));
        }
        Ok(())
    }

    /// Grow a segment from `lend` up to the start of `self`, the cell next to `self`
    /// matching its first spacing and every cell further out `q` times wider, with `q`
    /// as close to `growth_rate` as an integer number of cells allows.
    pub fn grow_toward_left(&self, lend: f64, growth_rate: f64) -> Result<Segment, Error> {
        self.check_growable()?;
        let length = self.start() - lend;
        let a0 = self.start_dx();
        let (n, q) = find_n_growth_rate(a0, length, growth_rate)?;

        let mut grid = Array1::<f64>::zeros(n + 1);
        grid[0] = lend;
        grid[n] = self.start();

        let mut dx = a0;
        for i in 0..n - 1 {
            grid[n - 1 - i] = grid[n - i] - dx;
            dx *= q;
        }

        Ok(Segment::new(grid))
    }

    /// mirror image of [`Segment::grow_toward_left`], from the end of `self` to `rend`
    pub fn grow_toward_right(&self, rend: f64, growth_rate: f64) -> Result<Segment, Error> {
        self.check_growable()?;
        let length = rend - self.end();
        let a0 = self.end_dx();
        let (n, q) = find_n_growth_rate(a0, length, growth_rate)?;

        let mut grid = Array1::<f64>::zeros(n + 1);
        grid[0] = self.end();
        grid[n] = rend;

        let mut dx = a0;
        for i in 0..n - 1 {
            grid[i + 1] = grid[i] + dx;
            dx *= q;
        }

        Ok(Segment::new(grid))
    }

    /// derivative of the coordinate with respect to the index at the first point
    pub fn lslope(&self) -> f64 {
        let x = &self.grid;
        match x.len() {
            0 | 1 => 0.0,
            2 => x[1] - x[0],
            3 => (-3.0 * x[0] + 4.0 * x[1] - x[2]) / 2.0,
            _ => (-11.0 * x[0] + 18.0 * x[1] - 9.0 * x[2] + 2.0 * x[3]) / 6.0,
        }
    }

    /// derivative of the coordinate with respect to the index at the last point
    pub fn rslope(&self) -> f64 {
        let x = &self.grid;
        let n = x.len();
        match n {
            0 | 1 => 0.0,
            2 => x[1] - x[0],
            3 => (3.0 * x[2] - 4.0 * x[1] + x[0]) / 2.0,
            _ => (11.0 * x[n - 1] - 18.0 * x[n - 2] + 9.0 * x[n - 3] - 2.0 * x[n - 4]) / 6.0,
        }
    }

    /// Relax the interior points towards a smooth spacing distribution, keeping both
    /// ends fixed.
    ///
    /// Each end is closed with a ghost point: when a slope is given the ghost makes the
    /// first derivative at that end match it, otherwise the second derivative vanishes
    /// there. Interior points are then updated together from a fourth order stencil.
    /// Segments of fewer than 3 points are left alone.
    pub fn smooth(
        &mut self,
        lslope: Option<f64>,
        rslope: Option<f64>,
        options: SmoothOptions,
    ) -> &mut Self {
        let n = self.npoint();
        if n < 3 {
            return self;
        }

        // grid at 1..=n, ghosts at 0 and m
        let m = n + 1;
        let mut x = Array1::<f64>::zeros(n + 2);
        x.slice_mut(s![1..=n]).assign(&self.grid);

        let relax = options.relax;

        for _ in 0..options.iterations {
            x[0] = match lslope {
                Some(slope) => {
                    (12.0 * slope + 10.0 * x[1] - 18.0 * x[2] + 6.0 * x[3] - x[4]) / -3.0
                }
                None => (20.0 * x[1] - 6.0 * x[2] - 4.0 * x[3] + x[4]) / 11.0,
            };
            x[m] = match rslope {
                Some(slope) => {
                    (12.0 * slope - 10.0 * x[m - 1] + 18.0 * x[m - 2] - 6.0 * x[m - 3]
                        + x[m - 4])
                        / 3.0
                }
                None => (20.0 * x[m - 1] - 6.0 * x[m - 2] - 4.0 * x[m - 3] + x[m - 4]) / 11.0,
            };

            let relaxed = {
                let center = x.slice(s![2..n]);
                let west = x.slice(s![1..n - 1]);
                let far_west = x.slice(s![0..n - 2]);
                let east = x.slice(s![3..n + 1]);
                let far_east = x.slice(s![4..n + 2]);

                let stencil = (4.0 * (&west + &east) - &far_west - &far_east) / 6.0;
                (1.0 - relax) * &center + relax * stencil
            };

            x.slice_mut(s![2..n]).assign(&relaxed);
        }

        self.grid.slice_mut(s![1..n - 1]).assign(&x.slice(s![2..n]));
        self
    }
}

impl From<Vec<f64>> for Segment {
    fn from(grid: Vec<f64>) -> Self {
        Self::new(Array1::from(grid))
    }
}

impl From<Array1<f64>> for Segment {
    fn from(grid: Array1<f64>) -> Self {
        Self::new(grid)
    }
}

/// `left + right` joins two segments that share a boundary point, keeping it once
impl Add for Segment {
    type Output = Segment;

    fn add(self, rhs: Segment) -> Segment {
        connect_segs(&[self, rhs])
    }
}

/// Join segments end to end. Every segment after the first is expected to start where
/// the previous one ended; that shared point is kept once.
pub fn connect_segs(segs: &[Segment]) -> Segment {
    let first = match segs.first() {
        Some(first) if first.npoint() > 0 => first,
        _ => return Segment::new(Array1::zeros(0)),
    };

    let mut grid = vec![first.start()];
    for seg in segs {
        grid.extend(seg.grid.iter().skip(1));
    }

    Segment::from(grid)
}
