//! # Case assembly
//!
//! The pieces of a solver case this crate knows how to produce: the computational
//! domain section of the input file, one non-uniform grid file per stretched axis, and
//! the cubic spline surface file. The functions in this module set the domain up the
//! way the solver expects, e.g. [`refine_grid`] stretches an axis and keeps the domain's
//! point count and extent in sync with the grid file.
//!
//! ```
//! use vicar::case::{refine_grid, Axis, Case, RefineOptions};
//!
//! let mut case = Case::default();
//! refine_grid(&mut case, Axis::X, [4.0, 6.0, 20.0], 0.1, &RefineOptions::default()).unwrap();
//!
//! assert!(case.xgrid.is_on());
//! assert_eq!(case.domain.xout.as_f64().unwrap(), 20.0);
//!
//! let mut input = Vec::new();
//! case.write_input(&mut input).unwrap();
//! ```

mod cspline;
mod domain;
mod nonuniform_grid;
mod refine;

pub use cspline::{CSpline, Surface};
pub use domain::Domain;
pub use nonuniform_grid::NonuniformGrid;
pub use refine::{
    grid_2d, grid_stats, refine_grid, uniform_grid_dx, uniform_grid_n, GridStats, RefineOptions,
    Resample,
};

use crate::format::write_banner;
use crate::prelude::*;

use std::fmt;
use std::str::FromStr;

/// one of the three grid axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(error::UnknownName::new(s.to_string(), "x, y, z".to_string()).into()),
        }
    }
}

/// A solver case: the domain section and the optional per axis grid and surface files.
#[derive(Debug, Clone, vicar::Group)]
pub struct Case {
    pub domain: Domain,
    pub xgrid: Optional<NonuniformGrid>,
    pub ygrid: Optional<NonuniformGrid>,
    pub zgrid: Optional<NonuniformGrid>,
    pub cspline: Optional<CSpline>,
}

impl Default for Case {
    fn default() -> Self {
        Self {
            domain: Domain::default(),
            xgrid: Optional::new("xgrid", NonuniformGrid::default()),
            ygrid: Optional::new("ygrid", NonuniformGrid::default()),
            zgrid: Optional::new("zgrid", NonuniformGrid::default()),
            cspline: Optional::new("cspline", CSpline::default()),
        }
    }
}

impl Case {
    pub fn grid(&self, axis: Axis) -> &Optional<NonuniformGrid> {
        match axis {
            Axis::X => &self.xgrid,
            Axis::Y => &self.ygrid,
            Axis::Z => &self.zgrid,
        }
    }

    pub fn grid_mut(&mut self, axis: Axis) -> &mut Optional<NonuniformGrid> {
        match axis {
            Axis::X => &mut self.xgrid,
            Axis::Y => &mut self.ygrid,
            Axis::Z => &mut self.zgrid,
        }
    }

    /// the sections of the main input file, each under its own banner
    pub fn write_input<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        write_banner(writer, "Computational Domain Configuration (domain)")?;
        self.domain.write(writer)
    }

    /// the grid file of `axis`, fails with [`Error::Inactive`] for uniform axes
    pub fn write_grid<W: Write>(&self, axis: Axis, writer: &mut W) -> Result<(), Error> {
        self.grid(axis).write(writer)
    }

    pub fn write_cspline<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        self.cspline.write(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::collect_fields;

    #[test]
    fn axis_names() {
        assert_eq!("X".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
        assert!(matches!("w".parse::<Axis>(), Err(Error::UnknownName(_))));
        assert_eq!(Axis::Y.to_string(), "y");
    }

    #[test]
    fn disabled_grids_are_hidden() {
        let mut case = Case::default();
        let paths: Vec<String> = collect_fields(&case).into_iter().map(|(p, _)| p).collect();
        assert!(paths.contains(&"domain.nx".to_string()));
        assert!(!paths.iter().any(|p| p.starts_with("xgrid")));

        case.xgrid.enable();
        let paths: Vec<String> = collect_fields(&case).into_iter().map(|(p, _)| p).collect();
        assert!(paths.contains(&"xgrid.nodes".to_string()));
    }

    #[test]
    fn containers_are_not_settable() {
        let mut case = Case::default();
        assert!(matches!(case.set("domain", 1), Err(Error::NotSettable(_))));
        assert!(matches!(case.set("wgrid", 1), Err(Error::UnknownName(_))));
    }

    #[test]
    fn uniform_axis_has_no_grid_file() {
        let case = Case::default();
        let mut out = Vec::new();
        let err = case.write_grid(Axis::Y, &mut out).unwrap_err();
        assert!(matches!(err, Error::Inactive(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn input_starts_with_banner() {
        let case = Case::default();
        let mut out = Vec::new();
        case.write_input(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let banner = text.lines().next().unwrap();
        assert_eq!(banner.len(), 80);
        assert!(banner.contains("Computational Domain Configuration (domain)"));
        assert_eq!(text.lines().count(), 15);
    }
}
