//! # Traits
//!
//! These are the seams of the configuration tree. A solver input file is described by
//! nested [`Group`]s (fixed schemas, usually derived), [`List`](crate::List)s and
//! [`Dict`](crate::Dict)s (runtime collections), all of which are [`Container`]s.
//! Leaves are [`Field`]s. Anything that can render itself into a solver file
//! implements [`Writable`].
//!
#![cfg_attr(
    feature = "derive",
    doc = r#"
With the `derive` feature, `Group` (and the matching `Container` impl) is derived:

```
use vicar::{Field, Group, SymbolMap};

#[derive(vicar::Group)]
struct Domain {
    nx: Field,
    #[group(rename = "xgridUnif")]
    x_grid_unif: Field,
}

let mut domain = Domain {
    nx: Field::new("nx", 151),
    x_grid_unif: Field::new("xgridUnif", "uniform").with_map(SymbolMap::from_pairs([
        ("uniform", 1),
        ("nonuniform", 2),
    ]).unwrap()),
};

domain.set("nx", 64).unwrap();
domain.set("xgridUnif", "nonuniform").unwrap();
assert_eq!(domain.nx.as_i64().unwrap(), 64);
assert_eq!(domain.x_grid_unif.as_i64().unwrap(), 2);

// the schema is fixed
assert!(domain.set("ny", 10).is_err());
```
"#
)]

use crate::field::{Field, Value};
use crate::tree::{Child, ChildMut};
use crate::Error;
use std::io::Write;

/// which flavour of node a [`Container`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Group,
    List,
    Dict,
}

/// any non-leaf node of the configuration tree
pub trait Container {
    fn kind(&self) -> ContainerKind;

    /// every direct child with the name it is reached by. Lists name their children by
    /// their (offset) index.
    fn children(&self) -> Vec<(String, Child<'_>)>;

    fn len(&self) -> usize {
        self.children().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A node with a fixed, statically known set of named children.
///
/// Field children can be assigned by name through [`Group::set`]; container children can
/// only be reached, never replaced. Names that are not part of the schema are rejected.
/// This trait is most easily implemented with `#[derive(vicar::Group)]`.
pub trait Group: Container {
    /// names of all children, in declaration order
    fn keys(&self) -> &'static [&'static str];

    fn child(&self, name: &str) -> Option<Child<'_>>;

    fn child_mut(&mut self, name: &str) -> Option<ChildMut<'_>>;

    fn field(&self, name: &str) -> Option<&Field> {
        match self.child(name)? {
            Child::Field(field) => Some(field),
            Child::Container(_) => None,
        }
    }

    /// assign a new value to the field child called `name`
    fn set_value(&mut self, name: &str, value: Value) -> Result<(), Error> {
        let existing = self.keys().join(", ");
        match self.child_mut(name) {
            Some(ChildMut::Field(field)) => field.set(value),
            Some(ChildMut::Container(_)) => {
                Err(crate::error::NotSettable::new(name.to_string()).into())
            }
            None => Err(crate::error::UnknownName::new(name.to_string(), existing).into()),
        }
    }

    fn set<V: Into<Value>>(&mut self, name: &str, value: V) -> Result<(), Error>
    where
        Self: Sized,
    {
        self.set_value(name, value.into())
    }

    /// assign every pair whose name is a field of this group, names that are not part of
    /// the schema are skipped
    fn set_children<I, K, V>(&mut self, pairs: I) -> Result<(), Error>
    where
        Self: Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        for (name, value) in pairs {
            let name = name.as_ref();
            if self.keys().contains(&name) {
                self.set_value(name, value.into())?;
            }
        }
        Ok(())
    }
}

/// Anything that can sit in the configuration tree: a [`Field`] leaf or a [`Container`].
///
/// Every `Container` is a `Node`, so only leaves need an explicit impl.
pub trait Node {
    fn as_child(&self) -> Child<'_>;

    fn as_child_mut(&mut self) -> ChildMut<'_>;
}

/// validation hook run on every element inserted into a [`List`](crate::List) or
/// [`Dict`](crate::Dict)
pub trait ElementCheck<T> {
    fn check(&self, candidate: &T) -> Result<(), Error>;
}

/// Operations a [`Field`] exposes on array-like values it stores.
///
/// Indices are solver indices, offset by [`ArrayAccess::start_index`].
pub trait ArrayAccess {
    fn shape(&self) -> (usize, usize);

    fn start_index(&self) -> usize;

    fn get(&self, i: usize, j: usize) -> Result<f64, Error>;

    fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), Error>;
}

/// something that renders itself into a solver input file
pub trait Writable {
    fn write<W: Write>(&self, writer: &mut W) -> Result<(), Error>;
}
