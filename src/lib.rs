// the readme example uses the `case` module
#![cfg_attr(feature = "derive", doc = include_str!("../README.md"))]
#![cfg_attr(
    not(feature = "derive"),
    doc = "Typed configuration trees for the Vicar3D flow solver and the grid stretching tools used to build its non-uniform grids."
)]

// lets the derive macros refer to `vicar::` from inside this crate
extern crate self as vicar;

pub mod array;
#[cfg(feature = "derive")]
pub mod case;
pub mod error;
pub mod field;
pub mod format;
pub mod grid;
pub mod prelude;
pub mod tree;
mod traits;
mod utils;

pub use traits::{ArrayAccess, Container, ContainerKind, ElementCheck, Group, Node, Writable};

pub use array::{Dataset2D, DatasetElement, Point3D};
pub use field::{Field, SymbolMap, Value, ValueType, Verbose};
pub use tree::{Child, ChildMut, Dict, List, Optional, Unchecked};

pub use format::{write_banner, write_banner_with, DatasetFormatter, Formatter, KV1Formatter, KV2Formatter};
pub use format::{KeyOverValue, Layout, Tabular, ValueKeySplit};

pub use grid::{connect_segs, find_n_growth_rate, Segment, SmoothOptions};
pub use utils::find_nearest_tab;

#[cfg(feature = "derive")]
pub use vicar_derive::Group;

pub use ndarray;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Type(#[from] error::TypeMismatch),
    #[error("{0}")]
    Element(#[from] error::ElementMismatch),
    #[error("{0}")]
    UnknownName(#[from] error::UnknownName),
    #[error("{0}")]
    NotSettable(#[from] error::NotSettable),
    #[error("{0}")]
    DirectMutation(#[from] error::DirectMutation),
    #[error("{0}")]
    Inactive(#[from] error::Inactive),
    #[error("{0}")]
    OutOfBounds(#[from] error::OutOfBounds),
    #[error("{0}")]
    NonInjectiveMap(#[from] error::NonInjectiveMap),
    #[error("{0}")]
    Growth(#[from] error::Growth),
    #[error("Growing a segment needs at least 2 points, but it has {0}")]
    ShortSegment(usize),
    #[error("Expected a 2d array, but encountered {0} dimensions")]
    Rank(usize),
    #[error("Expected exactly 3 values for a point, but encountered {0}")]
    PointLength(usize),
    #[error("Value `{value}` stored in field `{key}` is not a {expected}")]
    NotA {
        key: String,
        expected: field::ValueType,
        value: String,
    },
    #[error("Name `{0}` already exists, choose another name")]
    KeyExists(String),
    #[error("Name `{0}` does not exist")]
    MissingKey(String),
}
