use super::offset_range;
use crate::prelude::*;
use crate::utils::float_str;

use ndarray::{s, ArrayD, ArrayView2, ArrayViewMut2, Ix2};
use num_traits::{ToPrimitive, Zero};
use std::fmt::Debug;
use std::ops::{Index, IndexMut, RangeBounds};

/// Numbers a [`Dataset2D`] can hold: floats for coordinates and coefficients, integers
/// for connectivity and other index tables.
pub trait DatasetElement: Copy + PartialEq + Debug + Zero {
    /// the kind of field a dataset of this element is stored in
    const VALUE_TYPE: ValueType;

    /// the element as written to a solver file
    fn render(&self) -> String;

    fn to_f64(self) -> f64;

    /// `None` when `value` has no exact representation
    fn from_f64(value: f64) -> Option<Self>;
}

impl DatasetElement for f64 {
    const VALUE_TYPE: ValueType = ValueType::Dataset2D;

    fn render(&self) -> String {
        float_str(*self)
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(value: f64) -> Option<Self> {
        Some(value)
    }
}

impl DatasetElement for i64 {
    const VALUE_TYPE: ValueType = ValueType::IntDataset2D;

    fn render(&self) -> String {
        self.to_string()
    }

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(value: f64) -> Option<Self> {
        if value.fract() != 0.0 {
            return None;
        }
        value.to_i64()
    }
}

#[derive(Clone, PartialEq, Debug)]
/// Two dimensional array of numbers indexed the way the solver counts.
///
/// With the default `start_index` of 1, `dataset[(1, 1)]` is the first element of the
/// underlying array and `dataset[(nrows, ncols)]` its last.
///
/// ```
/// use vicar::Dataset2D;
/// use vicar::ndarray::array;
///
/// let data = Dataset2D::new(array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
/// assert_eq!(data[(2, 1)], 3.0);
/// assert_eq!(data[(3, 2)], 6.0);
///
/// let conn = Dataset2D::new(array![[1_i64, 2, 3]]);
/// assert_eq!(conn[(1, 3)], 3);
/// ```
pub struct Dataset2D<T = f64> {
    arr: Array2<T>,
    start_index: usize,
}

impl Dataset2D<f64> {
    /// an empty dataset with `ncols` columns, the usual initial value of array fields
    pub fn empty(ncols: usize) -> Self {
        Self::new(Array2::zeros((0, ncols)))
    }

    /// a single column holding `values`
    pub fn column(values: &[f64]) -> Self {
        let arr = Array1::from(values.to_vec()).insert_axis(ndarray::Axis(1));
        Self::new(arr)
    }
}

impl<T: DatasetElement> Dataset2D<T> {
    pub fn new(arr: Array2<T>) -> Self {
        Self::with_start_index(arr, 1)
    }

    pub fn with_start_index(arr: Array2<T>, start_index: usize) -> Self {
        Self { arr, start_index }
    }

    pub fn arr(&self) -> &Array2<T> {
        &self.arr
    }

    pub fn arr_mut(&mut self) -> &mut Array2<T> {
        &mut self.arr
    }

    pub fn into_inner(self) -> Array2<T> {
        self.arr
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn set_start_index(&mut self, start_index: usize) {
        self.start_index = start_index;
    }

    pub fn nrows(&self) -> usize {
        self.arr.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.arr.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.arr.dim()
    }

    fn offset(&self, i: usize, j: usize) -> Option<(usize, usize)> {
        let i = i.checked_sub(self.start_index)?;
        let j = j.checked_sub(self.start_index)?;
        Some((i, j))
    }

    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        self.offset(i, j).and_then(|ij| self.arr.get(ij))
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> Option<&mut T> {
        self.offset(i, j).and_then(move |ij| self.arr.get_mut(ij))
    }

    /// view a block of the dataset, both ranges given in solver indices
    ///
    /// ```
    /// use vicar::Dataset2D;
    /// use vicar::ndarray::array;
    ///
    /// let data = Dataset2D::new(array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    /// let block = data.slice(2..=3, ..);
    /// assert_eq!(block, array![[3.0, 4.0], [5.0, 6.0]]);
    /// ```
    pub fn slice<R, C>(&self, rows: R, cols: C) -> ArrayView2<'_, T>
    where
        R: RangeBounds<usize>,
        C: RangeBounds<usize>,
    {
        let rows = offset_range(&rows, self.start_index, self.nrows());
        let cols = offset_range(&cols, self.start_index, self.ncols());
        self.arr.slice(s![rows, cols])
    }

    pub fn slice_mut<R, C>(&mut self, rows: R, cols: C) -> ArrayViewMut2<'_, T>
    where
        R: RangeBounds<usize>,
        C: RangeBounds<usize>,
    {
        let rows = offset_range(&rows, self.start_index, self.nrows());
        let cols = offset_range(&cols, self.start_index, self.ncols());
        self.arr.slice_mut(s![rows, cols])
    }

    /// iterate over the rows together with their solver index
    pub fn indexed_rows(&self) -> impl Iterator<Item = (usize, ArrayView1<'_, T>)> + '_ {
        self.arr
            .rows()
            .into_iter()
            .enumerate()
            .map(move |(row, values)| (row + self.start_index, values))
    }

    fn out_of_bounds(&self, i: usize, j: usize) -> Error {
        let (nrows, ncols) = self.shape();
        let row_ok = i >= self.start_index && i - self.start_index < nrows;
        if row_ok {
            error::OutOfBounds::new(j, self.start_index, ncols).into()
        } else {
            error::OutOfBounds::new(i, self.start_index, nrows).into()
        }
    }
}

impl<T: DatasetElement> From<Array2<T>> for Dataset2D<T> {
    fn from(arr: Array2<T>) -> Self {
        Self::new(arr)
    }
}

impl<T> From<Dataset2D<T>> for Array2<T> {
    fn from(data: Dataset2D<T>) -> Self {
        data.arr
    }
}

impl<T: DatasetElement> TryFrom<ArrayD<T>> for Dataset2D<T> {
    type Error = Error;

    fn try_from(arr: ArrayD<T>) -> Result<Self, Self::Error> {
        let ndim = arr.ndim();
        let arr = arr
            .into_dimensionality::<Ix2>()
            .map_err(|_| Error::Rank(ndim))?;
        Ok(Self::new(arr))
    }
}

impl<T: DatasetElement> Index<(usize, usize)> for Dataset2D<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        match self.get(i, j) {
            Some(value) => value,
            None => panic!("{}", self.out_of_bounds(i, j)),
        }
    }
}

impl<T: DatasetElement> IndexMut<(usize, usize)> for Dataset2D<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        if self.get(i, j).is_none() {
            panic!("{}", self.out_of_bounds(i, j));
        }
        let (i, j) = (i - self.start_index, j - self.start_index);
        &mut self.arr[(i, j)]
    }
}

impl<T: DatasetElement> ArrayAccess for Dataset2D<T> {
    fn shape(&self) -> (usize, usize) {
        self.arr.dim()
    }

    fn start_index(&self) -> usize {
        self.start_index
    }

    fn get(&self, i: usize, j: usize) -> Result<f64, Error> {
        Dataset2D::get(self, i, j)
            .map(|value| value.to_f64())
            .ok_or_else(|| self.out_of_bounds(i, j))
    }

    fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), Error> {
        let converted = T::from_f64(value).ok_or_else(|| {
            error::TypeMismatch::new(
                format!("({i}, {j})"),
                T::VALUE_TYPE,
                ValueType::Float,
                float_str(value),
            )
        })?;

        let err = self.out_of_bounds(i, j);
        let slot = Dataset2D::get_mut(self, i, j).ok_or(err)?;
        *slot = converted;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn one_based_corners() {
        let arr = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let data = Dataset2D::new(arr.clone());

        assert_eq!(data[(1, 1)], arr[(0, 0)]);
        assert_eq!(data[(3, 2)], arr[(2, 1)]);
        assert_eq!(data[(2, 1)], arr[(1, 0)]);
        assert!(data.get(0, 1).is_none());
        assert!(data.get(4, 1).is_none());
    }

    #[test]
    fn zero_based_start_index() {
        let data = Dataset2D::with_start_index(array![[1.0, 2.0], [3.0, 4.0]], 0);
        assert_eq!(data[(0, 0)], 1.0);
        assert_eq!(data[(1, 1)], 4.0);
    }

    #[test]
    fn slices_shift_like_indices() {
        let mut data = Dataset2D::new(Array2::<f64>::zeros((4, 3)));
        data.slice_mut(2..4, 2..).fill(1.0);

        // rows 2 and 3, columns 2 and 3 in solver indices
        assert_eq!(data.arr().sum(), 4.0);
        assert_eq!(data[(2, 2)], 1.0);
        assert_eq!(data[(3, 3)], 1.0);
        assert_eq!(data[(4, 3)], 0.0);
        assert_eq!(data[(2, 1)], 0.0);
    }

    #[test]
    fn rank_is_checked() {
        let arr = ArrayD::<f64>::zeros(vec![2, 2, 2]);
        let err = Dataset2D::<f64>::try_from(arr).unwrap_err();
        assert!(matches!(err, Error::Rank(3)));

        let arr = ArrayD::<f64>::zeros(vec![3, 2]);
        let data = Dataset2D::<f64>::try_from(arr).unwrap();
        assert_eq!(data.shape(), (3, 2));
    }

    #[test]
    #[should_panic]
    fn index_below_start_panics() {
        let data = Dataset2D::new(Array2::<f64>::zeros((2, 2)));
        let _ = data[(0, 1)];
    }

    #[test]
    fn access_trait_reports_bounds() {
        let mut data = Dataset2D::new(Array2::<f64>::zeros((2, 2)));
        ArrayAccess::set(&mut data, 2, 2, 3.0).unwrap();
        assert_eq!(ArrayAccess::get(&data, 2, 2).unwrap(), 3.0);
        assert!(matches!(
            ArrayAccess::get(&data, 3, 1),
            Err(Error::OutOfBounds(_))
        ));
    }

    #[test]
    fn integer_elements() {
        let mut conn = Dataset2D::new(array![[1_i64, 2, 3], [2, 3, 4]]);
        assert_eq!(conn[(2, 3)], 4);
        assert_eq!(ArrayAccess::get(&conn, 1, 2).unwrap(), 2.0);

        ArrayAccess::set(&mut conn, 1, 1, 7.0).unwrap();
        assert_eq!(conn[(1, 1)], 7);

        // a fraction has no integer element
        let err = ArrayAccess::set(&mut conn, 1, 1, 7.5).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
        assert_eq!(conn[(1, 1)], 7);
    }
}
