use super::Unchecked;
use crate::prelude::*;
use crate::tree::Child;

use std::ops::{Index, IndexMut};

/// An insertion ordered, string keyed collection of tree nodes.
///
/// Like [`List`](crate::List) every inserted element runs through the element check `K`,
/// and a dict can be made factory only, in which case [`Dict::add_new`],
/// [`Dict::get_or_create`] and [`Dict::remove_with`] are the only ways to change it.
///
/// ```
/// use vicar::{Dict, Field};
///
/// let mut probes: Dict<Field> = Dict::new().factory_only();
/// probes.add_new("inlet", |name| Field::new(name, 1.0)).unwrap();
///
/// assert!(probes.add_new("inlet", |name| Field::new(name, 2.0)).is_err());
/// assert!(probes.insert("outlet", Field::new("outlet", 0.0)).is_err());
/// assert_eq!(probes["inlet"].as_f64().unwrap(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Dict<T, K = Unchecked> {
    items: Vec<(String, T)>,
    check: K,
    factory_only: bool,
}

impl<T, K: Default> Dict<T, K> {
    pub fn new() -> Self {
        Self::with_check(K::default())
    }
}

impl<T, K: Default> Default for Dict<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> Dict<T, K> {
    pub fn with_check(check: K) -> Self {
        Self {
            items: Vec::new(),
            check,
            factory_only: false,
        }
    }

    pub fn factory_only(mut self) -> Self {
        self.factory_only = true;
        self
    }

    pub fn is_factory_only(&self) -> bool {
        self.factory_only
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|(key, _)| key == name)
    }

    fn guard(&self, operation: &'static str, use_instead: &'static str) -> Result<(), Error> {
        if self.factory_only {
            Err(error::DirectMutation::new(operation, use_instead).into())
        } else {
            Ok(())
        }
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.position(name).map(|i| &self.items[i].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.position(name).map(move |i| &mut self.items[i].1)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter().map(|(_, value)| value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.items.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn remove(&mut self, name: &str) -> Result<T, Error> {
        self.guard("remove", "remove_with")?;
        self.take(name)
    }

    fn take(&mut self, name: &str) -> Result<T, Error> {
        let i = self
            .position(name)
            .ok_or_else(|| Error::MissingKey(name.to_string()))?;
        Ok(self.items.remove(i).1)
    }

    /// Remove `name`, giving `cleanup` a chance to release whatever the element owns
    /// before it is handed back.
    pub fn remove_with<F>(&mut self, name: &str, cleanup: F) -> Result<T, Error>
    where
        F: FnOnce(&mut T),
    {
        let mut item = self.take(name)?;
        cleanup(&mut item);
        Ok(item)
    }

    pub fn clear(&mut self) -> Result<(), Error> {
        self.guard("clear", "remove_with")?;
        self.items.clear();
        Ok(())
    }
}

impl<T, K: ElementCheck<T>> Dict<T, K> {
    /// Insert or replace `name`, returning the element it replaced.
    pub fn insert<S: Into<String>>(&mut self, name: S, item: T) -> Result<Option<T>, Error> {
        self.guard("insert", "add_new")?;
        self.check.check(&item)?;

        let name = name.into();
        match self.position(&name) {
            Some(i) => Ok(Some(std::mem::replace(&mut self.items[i].1, item))),
            None => {
                self.items.push((name, item));
                Ok(None)
            }
        }
    }

    /// same as [`Dict::insert`], discarding any replaced element
    pub fn add_pair<S: Into<String>>(&mut self, name: S, item: T) -> Result<(), Error> {
        self.insert(name, item).map(|_| ())
    }

    /// Create a new element called `name`. Fails with [`Error::KeyExists`] if the name is
    /// already taken.
    pub fn add_new<F>(&mut self, name: &str, factory: F) -> Result<&mut T, Error>
    where
        F: FnOnce(&str) -> T,
    {
        if self.contains_key(name) {
            return Err(Error::KeyExists(name.to_string()));
        }
        self.push_new(name, factory)
    }

    /// the element called `name`, created by `factory` if it does not exist yet
    pub fn get_or_create<F>(&mut self, name: &str, factory: F) -> Result<&mut T, Error>
    where
        F: FnOnce(&str) -> T,
    {
        match self.position(name) {
            Some(i) => Ok(&mut self.items[i].1),
            None => self.push_new(name, factory),
        }
    }

    fn push_new<F>(&mut self, name: &str, factory: F) -> Result<&mut T, Error>
    where
        F: FnOnce(&str) -> T,
    {
        let item = factory(name);
        self.check.check(&item)?;

        let index = self.items.len();
        self.items.push((name.to_string(), item));
        Ok(&mut self.items[index].1)
    }
}

impl<T, K> Index<&str> for Dict<T, K> {
    type Output = T;

    fn index(&self, name: &str) -> &T {
        match self.get(name) {
            Some(item) => item,
            None => panic!("{}", Error::MissingKey(name.to_string())),
        }
    }
}

impl<T, K> IndexMut<&str> for Dict<T, K> {
    fn index_mut(&mut self, name: &str) -> &mut T {
        match self.position(name) {
            Some(i) => &mut self.items[i].1,
            None => panic!("{}", Error::MissingKey(name.to_string())),
        }
    }
}

impl<T: Node, K> Container for Dict<T, K> {
    fn kind(&self) -> ContainerKind {
        ContainerKind::Dict
    }

    fn children(&self) -> Vec<(String, Child<'_>)> {
        self.items
            .iter()
            .map(|(name, item)| (name.clone(), item.as_child()))
            .collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Writable, K> Writable for Dict<T, K> {
    fn write<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        for item in self.values() {
            item.write(writer)?;
        }
        Ok(())
    }
}
