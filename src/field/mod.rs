//! # Fields
//!
//! A [`Field`] is one named entry of a solver input file. The type of the value it holds
//! is decided once, from the value it is constructed with, and every later assignment
//! has to agree with it. A handful of lossless conversions are applied on the way in:
//!
//! * a symbol of the field's [`SymbolMap`] is replaced by the value it maps to
//! * integers widen to floats on float fields, integer arrays on float dataset fields
//! * raw 2D arrays (and grid [`Segment`](crate::Segment)s) are wrapped into a
//!   [`Dataset2D`] on dataset fields
//! * sequences of three numbers become a [`Point3D`] on point fields
//!
//! ```
//! use vicar::{Field, SymbolMap, Value};
//!
//! let mut restart = Field::new("iRestart", false).with_map(SymbolMap::bool_to_int());
//! assert_eq!(restart.value(), &Value::Int(0));
//!
//! restart.set(true).unwrap();
//! assert_eq!(restart.value(), &Value::Int(1));
//!
//! let mut xout = Field::new("xout", 15.0);
//! xout.set(20).unwrap();
//! assert_eq!(xout.as_f64().unwrap(), 20.0);
//!
//! // a string is never a float
//! assert!(xout.set("far").is_err());
//! ```

mod symbol_map;
mod value;
mod verbose;

pub use symbol_map::SymbolMap;
pub use value::{Value, ValueType};
pub use verbose::Verbose;

use crate::prelude::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
/// A named value whose type is locked at construction
pub struct Field {
    key: String,
    dscrp: String,
    value: Value,
    value_type: ValueType,
    map: SymbolMap,
}

impl Field {
    /// create a field, inferring the locked type from `value`
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let value = value.into().into_stored();
        let value_type = value.value_type();

        Self {
            key: key.into(),
            dscrp: String::new(),
            value,
            value_type,
            map: SymbolMap::new(),
        }
    }

    /// attach a short human readable description
    pub fn describe<S: Into<String>>(mut self, dscrp: S) -> Self {
        self.dscrp = dscrp.into();
        self
    }

    /// Attach a symbol map. If the initial value is one of the map's symbols it is
    /// replaced by the mapped value, and the field locks to the mapped value's type.
    pub fn with_map(mut self, map: SymbolMap) -> Self {
        if let Some(mapped) = map.forward(&self.value) {
            self.value = mapped.clone();
            self.value_type = self.value.value_type();
        }
        self.map = map;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.dscrp
    }

    pub fn map(&self) -> &SymbolMap {
        &self.map
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Assign a new value, converting it to the locked type where that is lossless.
    ///
    /// On error the field keeps its previous value.
    pub fn set<V: Into<Value>>(&mut self, new: V) -> Result<(), Error> {
        self.value = self.coerce(new.into())?;
        Ok(())
    }

    fn coerce(&self, new: Value) -> Result<Value, Error> {
        let new = match self.map.forward(&new) {
            Some(mapped) => mapped.clone(),
            None => new,
        };

        let new = match (self.value_type, new) {
            (ValueType::Float, Value::Int(int)) => Value::Float(int as f64),
            (ValueType::Dataset2D, Value::Array(arr)) => Value::Dataset2D(Dataset2D::new(arr)),
            (ValueType::Dataset2D, Value::IntArray(arr)) => {
                Value::Dataset2D(Dataset2D::new(arr.mapv(|x| x as f64)))
            }
            (ValueType::Dataset2D, Value::IntDataset2D(data)) => Value::Dataset2D(
                Dataset2D::with_start_index(data.arr().mapv(|x| x as f64), data.start_index()),
            ),
            (ValueType::IntDataset2D, Value::IntArray(arr)) => {
                Value::IntDataset2D(Dataset2D::new(arr))
            }
            (ValueType::Point3D, Value::Seq(values)) => {
                match Point3D::try_from(values.as_slice()) {
                    Ok(point) => Value::Point3D(point),
                    Err(_) => Value::Seq(values),
                }
            }
            (_, other) => other,
        };

        if new.is(self.value_type) {
            Ok(new)
        } else {
            Err(error::TypeMismatch::new(
                self.key.clone(),
                self.value_type,
                new.value_type(),
                new.to_string(),
            )
            .into())
        }
    }

    fn not_a(&self, expected: ValueType) -> Error {
        Error::NotA {
            key: self.key.clone(),
            expected,
            value: self.value.to_string(),
        }
    }

    pub fn as_bool(&self) -> Result<bool, Error> {
        match &self.value {
            Value::Bool(x) => Ok(*x),
            _ => Err(self.not_a(ValueType::Bool)),
        }
    }

    pub fn as_i64(&self) -> Result<i64, Error> {
        match &self.value {
            Value::Int(x) => Ok(*x),
            _ => Err(self.not_a(ValueType::Int)),
        }
    }

    pub fn as_f64(&self) -> Result<f64, Error> {
        match &self.value {
            Value::Float(x) => Ok(*x),
            _ => Err(self.not_a(ValueType::Float)),
        }
    }

    pub fn as_str(&self) -> Result<&str, Error> {
        match &self.value {
            Value::Str(x) => Ok(x),
            _ => Err(self.not_a(ValueType::Str)),
        }
    }

    pub fn as_point(&self) -> Result<&Point3D, Error> {
        match &self.value {
            Value::Point3D(x) => Ok(x),
            _ => Err(self.not_a(ValueType::Point3D)),
        }
    }

    pub fn as_dataset(&self) -> Result<&Dataset2D, Error> {
        match &self.value {
            Value::Dataset2D(x) => Ok(x),
            _ => Err(self.not_a(ValueType::Dataset2D)),
        }
    }

    pub fn as_dataset_mut(&mut self) -> Result<&mut Dataset2D, Error> {
        let err = self.not_a(ValueType::Dataset2D);
        match &mut self.value {
            Value::Dataset2D(x) => Ok(x),
            _ => Err(err),
        }
    }

    pub fn as_int_dataset(&self) -> Result<&Dataset2D<i64>, Error> {
        match &self.value {
            Value::IntDataset2D(x) => Ok(x),
            _ => Err(self.not_a(ValueType::IntDataset2D)),
        }
    }

    pub fn as_int_dataset_mut(&mut self) -> Result<&mut Dataset2D<i64>, Error> {
        let err = self.not_a(ValueType::IntDataset2D);
        match &mut self.value {
            Value::IntDataset2D(x) => Ok(x),
            _ => Err(err),
        }
    }

    /// the stored value seen as an array, if it is one
    pub fn array(&self) -> Option<&dyn ArrayAccess> {
        match &self.value {
            Value::Dataset2D(data) => Some(data),
            Value::IntDataset2D(data) => Some(data),
            Value::Point3D(point) => Some(point),
            _ => None,
        }
    }

    pub fn array_mut(&mut self) -> Option<&mut dyn ArrayAccess> {
        match &mut self.value {
            Value::Dataset2D(data) => Some(data),
            Value::IntDataset2D(data) => Some(data),
            Value::Point3D(point) => Some(point),
            _ => None,
        }
    }

    /// shape of an array valued field
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.array().map(ArrayAccess::shape)
    }

    /// element `(i, j)` of an array valued field, in solver indices
    pub fn get(&self, i: usize, j: usize) -> Result<f64, Error> {
        match self.array() {
            Some(array) => array.get(i, j),
            None => Err(self.not_a(ValueType::Dataset2D)),
        }
    }

    /// overwrite element `(i, j)` of an array valued field, in solver indices
    pub fn set_item(&mut self, i: usize, j: usize, value: f64) -> Result<(), Error> {
        let err = self.not_a(ValueType::Dataset2D);
        match self.array_mut() {
            Some(array) => array.set(i, j, value),
            None => Err(err),
        }
    }

    /// the key as printed in a file header, optionally decorated with the description
    /// and the symbol map
    pub fn key_str(&self, verbose: Verbose) -> String {
        let mut key = self.key.clone();

        if verbose.dscrp && !self.dscrp.is_empty() {
            key.push_str(&format!("({})", self.dscrp));
        }

        if verbose.vmap && !self.map.is_empty() {
            key.push_str(&format!("[{}]", self.map.reverse_str()));
        }

        key
    }

    /// the value as printed in a file, or its original symbol when `verbose.vorig` is set
    pub fn value_str(&self, verbose: Verbose) -> String {
        if verbose.vorig {
            if let Some(symbol) = self.map.reverse(&self.value) {
                return symbol.to_string();
            }
        }

        self.value.to_string()
    }

    pub fn key_len(&self, verbose: Verbose) -> usize {
        utils::char_len(&self.key_str(verbose))
    }

    pub fn value_len(&self, verbose: Verbose) -> usize {
        utils::char_len(&self.value_str(verbose))
    }

    /// width needed to print both key and value in the same column
    pub fn align_len(&self, verbose: Verbose) -> usize {
        self.key_len(verbose).max(self.value_len(verbose))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn int_widens_on_float_field() {
        let mut field = Field::new("xout", 15.0);
        field.set(3).unwrap();
        assert_eq!(field.value(), &Value::Float(3.0));
        assert_eq!(field.value_type(), ValueType::Float);
    }

    #[test]
    fn float_does_not_narrow_on_int_field() {
        let mut field = Field::new("nx", 151);
        let err = field.set(1.5).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
        assert_eq!(field.as_i64().unwrap(), 151);
    }

    #[test]
    fn symbol_locks_mapped_type() {
        let map = SymbolMap::from_pairs([("uniform", 1), ("nonuniform", 2)]).unwrap();
        let mut field = Field::new("xgridUnif", "uniform").with_map(map);

        assert_eq!(field.value_type(), ValueType::Int);
        assert_eq!(field.as_i64().unwrap(), 1);

        field.set("nonuniform").unwrap();
        assert_eq!(field.as_i64().unwrap(), 2);

        // codes are accepted directly
        field.set(1).unwrap();
        assert_eq!(field.as_i64().unwrap(), 1);

        // unknown symbols are strings, not ints
        assert!(field.set("stretched").is_err());
    }

    #[test]
    fn field_assignment_copies_value() {
        let source = Field::new("a", 2.5);
        let mut target = Field::new("b", 0.0);
        target.set(&source).unwrap();
        assert_eq!(target.as_f64().unwrap(), 2.5);
        assert_eq!(target.key(), "b");
    }

    #[test]
    fn raw_array_becomes_dataset() {
        let mut field = Field::new("nodes", Array2::<f64>::zeros((0, 1)));
        assert_eq!(field.value_type(), ValueType::Dataset2D);

        field.set(array![[1.0], [2.0], [3.0]]).unwrap();
        assert_eq!(field.shape(), Some((3, 1)));
        assert_eq!(field.get(2, 1).unwrap(), 2.0);

        field.set_item(3, 1, 7.0).unwrap();
        assert_eq!(field.as_dataset().unwrap()[(3, 1)], 7.0);
    }

    #[test]
    fn integer_datasets_stay_integer() {
        let mut conn = Field::new("conn", Array2::<i64>::zeros((0, 3)));
        assert_eq!(conn.value_type(), ValueType::IntDataset2D);

        conn.set(array![[1_i64, 2, 3], [2, 3, 4]]).unwrap();
        assert_eq!(conn.as_int_dataset().unwrap()[(2, 3)], 4);
        assert_eq!(conn.get(2, 1).unwrap(), 2.0);

        // floats never narrow into an integer table
        assert!(matches!(
            conn.set(array![[1.5, 2.0, 3.0]]),
            Err(Error::Type(_))
        ));
        assert!(conn.set_item(1, 1, 0.5).is_err());
        assert_eq!(conn.shape(), Some((2, 3)));

        // but integers widen into a float table
        let mut coords = Field::new("coords", Dataset2D::empty(3));
        coords.set(array![[1_i64, 2, 3]]).unwrap();
        assert_eq!(coords.as_dataset().unwrap()[(1, 3)], 3.0);
    }

    #[test]
    fn sequence_becomes_point() {
        let mut field = Field::new("center", Point3D::default());
        field.set([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(field.as_point().unwrap(), &Point3D::new(1.0, 2.0, 3.0));

        let err = field.set(vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::Type(_)));
        assert_eq!(field.get(1, 3).unwrap(), 3.0);
    }

    #[test]
    fn scalar_field_has_no_shape() {
        let field = Field::new("nx", 10);
        assert_eq!(field.shape(), None);
        assert!(matches!(field.get(1, 1), Err(Error::NotA { .. })));
    }

    #[test]
    fn key_and_value_strings() {
        let field = Field::new("iFlow", true)
            .describe("flow solver")
            .with_map(SymbolMap::bool_to_int());

        assert_eq!(field.key_str(Verbose::NONE), "iFlow");
        assert_eq!(field.key_str(Verbose::DSCRP), "iFlow(flow solver)");
        assert_eq!(
            field.key_str(Verbose::KEYALL),
            "iFlow(flow solver)[0: False, 1: True]"
        );
        assert_eq!(field.value_str(Verbose::KEYALL), "1");
        assert_eq!(field.value_str(Verbose::VORIG), "True");
        assert_eq!(field.align_len(Verbose::NONE), 5);
    }
}
