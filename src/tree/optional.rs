use crate::prelude::*;
use crate::tree::Child;

/// A node that is only part of the case when switched on, e.g. a non-uniform grid file
/// that is only written for stretched axes.
///
/// The wrapped node always exists, but reaching it through [`Optional::get`] /
/// [`Optional::get_mut`] or writing it fails with [`Error::Inactive`] until
/// [`Optional::enable`] is called. A disabled node has no children.
#[derive(Debug, Clone)]
pub struct Optional<T> {
    name: String,
    on: bool,
    inner: T,
}

impl<T> Optional<T> {
    /// a disabled node called `name`
    pub fn new<S: Into<String>>(name: S, inner: T) -> Self {
        Self {
            name: name.into(),
            on: false,
            inner,
        }
    }

    pub fn enabled<S: Into<String>>(name: S, inner: T) -> Self {
        let mut optional = Self::new(name, inner);
        optional.on = true;
        optional
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn set_on(&mut self, on: bool) {
        self.on = on;
    }

    pub fn enable(&mut self) {
        self.on = true;
    }

    pub fn disable(&mut self) {
        self.on = false;
    }

    fn inactive(&self) -> Error {
        error::Inactive::new(self.name.clone()).into()
    }

    pub fn get(&self) -> Result<&T, Error> {
        if self.on {
            Ok(&self.inner)
        } else {
            Err(self.inactive())
        }
    }

    pub fn get_mut(&mut self) -> Result<&mut T, Error> {
        if self.on {
            Ok(&mut self.inner)
        } else {
            Err(self.inactive())
        }
    }

    /// enable the node and return it
    pub fn activate(&mut self) -> &mut T {
        self.on = true;
        &mut self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Container> Container for Optional<T> {
    fn kind(&self) -> ContainerKind {
        self.inner.kind()
    }

    fn children(&self) -> Vec<(String, Child<'_>)> {
        match self.get() {
            Ok(inner) => inner.children(),
            Err(_) => Vec::new(),
        }
    }
}

impl<T: Writable> Writable for Optional<T> {
    fn write<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        self.get()?.write(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default() {
        let mut grid = Optional::new("xgrid", Field::new("n", 3));
        assert!(!grid.is_on());
        assert!(matches!(grid.get(), Err(Error::Inactive(_))));

        grid.enable();
        grid.get_mut().unwrap().set(4).unwrap();
        assert_eq!(grid.get().unwrap().as_i64().unwrap(), 4);

        grid.set_on(false);
        match grid.get_mut() {
            Err(Error::Inactive(detail)) => assert_eq!(detail.node, "xgrid"),
            _ => panic!("expected an inactive error"),
        }
    }

    #[test]
    fn disabled_has_no_children() {
        let mut dict: Dict<Field> = Dict::new();
        dict.insert("nx", Field::new("nx", 1)).unwrap();

        let mut optional = Optional::new("grid", dict);
        assert!(optional.children().is_empty());

        optional.activate();
        assert_eq!(optional.children().len(), 1);
        assert_eq!(optional.kind(), ContainerKind::Dict);
    }
}
