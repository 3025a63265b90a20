//! # Configuration tree
//!
//! Solver input is described by a tree. Leaves are [`Field`]s, inner nodes are
//! [`Container`]s: statically shaped [`Group`](crate::Group)s, and the runtime
//! collections [`List`] and [`Dict`] defined here. [`Optional`] switches a whole subtree
//! on or off.
//!
//! Any node hands out its direct children as [`Child`] references, which is enough to
//! walk the tree without knowing its concrete types:
//!
//! ```
//! use vicar::{tree, Field, List};
//!
//! let mut probes: List<Field> = List::new();
//! probes.append(Field::new("x", 1.0)).unwrap();
//! probes.append(Field::new("y", 2.0)).unwrap();
//!
//! let paths: Vec<String> = tree::collect_fields(&probes)
//!     .into_iter()
//!     .map(|(path, _)| path)
//!     .collect();
//! assert_eq!(paths, ["1", "2"]);
//! ```

mod dict;
mod list;
mod optional;

pub use dict::Dict;
pub use list::List;
pub use optional::Optional;

use crate::prelude::*;

/// shared view of a direct child of a container
#[derive(Clone, Copy)]
pub enum Child<'a> {
    Field(&'a Field),
    Container(&'a dyn Container),
}

/// exclusive view of a direct child of a container
pub enum ChildMut<'a> {
    Field(&'a mut Field),
    Container(&'a mut dyn Container),
}

impl<'a> Child<'a> {
    pub fn as_field(self) -> Option<&'a Field> {
        match self {
            Child::Field(field) => Some(field),
            Child::Container(_) => None,
        }
    }

    pub fn as_container(self) -> Option<&'a dyn Container> {
        match self {
            Child::Field(_) => None,
            Child::Container(container) => Some(container),
        }
    }
}

impl<'a> ChildMut<'a> {
    pub fn into_field(self) -> Option<&'a mut Field> {
        match self {
            ChildMut::Field(field) => Some(field),
            ChildMut::Container(_) => None,
        }
    }
}

impl Node for Field {
    fn as_child(&self) -> Child<'_> {
        Child::Field(self)
    }

    fn as_child_mut(&mut self) -> ChildMut<'_> {
        ChildMut::Field(self)
    }
}

impl<C: Container> Node for C {
    fn as_child(&self) -> Child<'_> {
        Child::Container(self)
    }

    fn as_child_mut(&mut self) -> ChildMut<'_> {
        ChildMut::Container(self)
    }
}

/// Accepts every element. The default check of [`List`] and [`Dict`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unchecked;

impl<T> ElementCheck<T> for Unchecked {
    fn check(&self, _candidate: &T) -> Result<(), Error> {
        Ok(())
    }
}

/// A `List<Field, ValueType>` only holds fields locked to one type.
impl ElementCheck<Field> for ValueType {
    fn check(&self, candidate: &Field) -> Result<(), Error> {
        if candidate.value_type() == *self {
            Ok(())
        } else {
            Err(error::ElementMismatch::new(
                format!("{self} field"),
                format!("{} field `{}`", candidate.value_type(), candidate.key()),
            )
            .into())
        }
    }
}

/// Walk the subtree below `root` depth first and return every field with its dotted
/// path, e.g. `domain.nx` or `surfaces.1.nPoint`.
pub fn collect_fields(root: &dyn Container) -> Vec<(String, &Field)> {
    let mut fields = Vec::new();
    collect_into(root, "", &mut fields);
    fields
}

fn collect_into<'a>(node: &'a dyn Container, prefix: &str, out: &mut Vec<(String, &'a Field)>) {
    for (name, child) in node.children() {
        let path = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };

        match child {
            Child::Field(field) => out.push((path, field)),
            Child::Container(container) => collect_into(container, &path, out),
        }
    }
}
