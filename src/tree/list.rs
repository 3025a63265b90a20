use super::Unchecked;
use crate::array::offset_range;
use crate::prelude::*;
use crate::tree::Child;

use std::ops::{AddAssign, Index, IndexMut, RangeBounds};

/// A runtime sized sequence of tree nodes, indexed the way the solver counts.
///
/// Every index handed to a `List` (including range bounds) is shifted by its
/// `start_index`, 1 by default. Inserted elements are first validated by the element
/// check `K`.
///
/// A list can be made *factory only*. Such lists reject `append`, `insert`, `set`,
/// `remove` and `clear` with [`Error::DirectMutation`]; elements are created through
/// [`List::append_new`] and [`List::reset_new`] instead, which lets the owner keep
/// related state (a counter field, a file per element) in sync.
///
/// `list += item` and `list += vec![..]` are shorthands that panic where
/// [`List::append`] and [`List::extend`] return the error: an element failing its check
/// ([`Error::Element`]) or a factory only list ([`Error::DirectMutation`]).
///
/// ```
/// use vicar::{Field, List};
///
/// let mut bodies: List<Field> = List::new();
/// bodies.append_new(2, |i| Field::new(format!("body{i}"), 0.0)).unwrap();
///
/// assert_eq!(bodies[1].key(), "body1");
/// assert_eq!(bodies[2].key(), "body2");
/// assert!(bodies.get(0).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct List<T, K = Unchecked> {
    items: Vec<T>,
    start_index: usize,
    check: K,
    factory_only: bool,
}

impl<T, K: Default> List<T, K> {
    pub fn new() -> Self {
        Self::with_check(K::default())
    }
}

impl<T, K: Default> Default for List<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K> List<T, K> {
    pub fn with_check(check: K) -> Self {
        Self {
            items: Vec::new(),
            start_index: 1,
            check,
            factory_only: false,
        }
    }

    /// only allow mutation through the factory operations
    pub fn factory_only(mut self) -> Self {
        self.factory_only = true;
        self
    }

    pub fn is_factory_only(&self) -> bool {
        self.factory_only
    }

    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn set_start_index(&mut self, start_index: usize) {
        self.start_index = start_index;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// iterate together with the solver index of every element
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (i + self.start_index, item))
    }

    fn offset(&self, index: usize) -> Option<usize> {
        index
            .checked_sub(self.start_index)
            .filter(|i| *i < self.items.len())
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        error::OutOfBounds::new(index, self.start_index, self.items.len()).into()
    }

    fn guard(&self, operation: &'static str, use_instead: &'static str) -> Result<(), Error> {
        if self.factory_only {
            Err(error::DirectMutation::new(operation, use_instead).into())
        } else {
            Ok(())
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.offset(index).map(|i| &self.items[i])
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.offset(index).map(move |i| &mut self.items[i])
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// elements in a range of solver indices
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> &[T] {
        let range = offset_range(&range, self.start_index, self.items.len());
        &self.items[range]
    }

    pub fn slice_mut<R: RangeBounds<usize>>(&mut self, range: R) -> &mut [T] {
        let range = offset_range(&range, self.start_index, self.items.len());
        &mut self.items[range]
    }

    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        self.guard("remove", "reset_new")?;
        let i = self.offset(index).ok_or_else(|| self.out_of_bounds(index))?;
        Ok(self.items.remove(i))
    }

    pub fn clear(&mut self) -> Result<(), Error> {
        self.guard("clear", "reset_new")?;
        self.items.clear();
        Ok(())
    }
}

impl<T, K: ElementCheck<T>> List<T, K> {
    pub fn append(&mut self, item: T) -> Result<(), Error> {
        self.guard("append", "append_new")?;
        self.check.check(&item)?;
        self.items.push(item);
        Ok(())
    }

    /// insert so that `item` ends up at solver index `index`
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), Error> {
        self.guard("insert", "append_new")?;
        self.check.check(&item)?;

        let i = index
            .checked_sub(self.start_index)
            .filter(|i| *i <= self.items.len())
            .ok_or_else(|| self.out_of_bounds(index))?;
        self.items.insert(i, item);
        Ok(())
    }

    /// replace the element at `index`, returning the previous one
    pub fn set(&mut self, index: usize, item: T) -> Result<T, Error> {
        self.guard("set", "reset_new")?;
        self.check.check(&item)?;

        let i = self.offset(index).ok_or_else(|| self.out_of_bounds(index))?;
        Ok(std::mem::replace(&mut self.items[i], item))
    }

    /// append every element, stopping at the first one that fails its check
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, items: I) -> Result<(), Error> {
        for item in items {
            self.append(item)?;
        }
        Ok(())
    }

    /// Create `n` new elements at the end of the list. `factory` receives the solver
    /// index each element will be stored at.
    pub fn append_new<F>(&mut self, n: usize, mut factory: F) -> Result<(), Error>
    where
        F: FnMut(usize) -> T,
    {
        for _ in 0..n {
            let item = factory(self.items.len() + self.start_index);
            self.check.check(&item)?;
            self.items.push(item);
        }
        Ok(())
    }

    /// drop every element and create `n` new ones
    pub fn reset_new<F>(&mut self, n: usize, factory: F) -> Result<(), Error>
    where
        F: FnMut(usize) -> T,
    {
        self.items.clear();
        self.append_new(n, factory)
    }
}

impl<T, K> Index<usize> for List<T, K> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.offset(index) {
            Some(i) => &self.items[i],
            None => panic!("{}", self.out_of_bounds(index)),
        }
    }
}

impl<T, K> IndexMut<usize> for List<T, K> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.offset(index) {
            Some(i) => &mut self.items[i],
            None => panic!("{}", self.out_of_bounds(index)),
        }
    }
}

/// # Panics
///
/// if the element fails its check, or the list is factory only
impl<T, K: ElementCheck<T>> AddAssign<T> for List<T, K> {
    fn add_assign(&mut self, item: T) {
        if let Err(e) = self.append(item) {
            panic!("{e}");
        }
    }
}

/// # Panics
///
/// if any element fails its check, or the list is factory only
impl<T, K: ElementCheck<T>> AddAssign<Vec<T>> for List<T, K> {
    fn add_assign(&mut self, items: Vec<T>) {
        if let Err(e) = self.extend(items) {
            panic!("{e}");
        }
    }
}

impl<'a, T, K> IntoIterator for &'a List<T, K> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T, K> IntoIterator for &'a mut List<T, K> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: Node, K> Container for List<T, K> {
    fn kind(&self) -> ContainerKind {
        ContainerKind::List
    }

    fn children(&self) -> Vec<(String, Child<'_>)> {
        self.indexed()
            .map(|(i, item)| (i.to_string(), item.as_child()))
            .collect()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: Writable, K> Writable for List<T, K> {
    fn write<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        for item in &self.items {
            item.write(writer)?;
        }
        Ok(())
    }
}
