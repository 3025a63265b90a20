//! Common traits and types that are useful for working with `vicar`
#![allow(unused_imports)]

pub use crate::array::{Dataset2D, Point3D};
pub use crate::field::{Field, SymbolMap, Value, ValueType, Verbose};
pub use crate::format::{DatasetFormatter, KV1Formatter, KV2Formatter};
pub use crate::grid::{connect_segs, Segment};
pub use crate::traits::{
    ArrayAccess, Container, ContainerKind, ElementCheck, Group, Node, Writable,
};
pub use crate::tree::{Child, ChildMut, Dict, List, Optional, Unchecked};

pub(crate) use crate::{error, utils, Error};
pub(crate) use std::io::Write;

pub(crate) use derive_more::{Constructor, Display};

pub(crate) use ndarray::{Array1, Array2, ArrayView1};
