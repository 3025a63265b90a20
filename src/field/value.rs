use crate::array::DatasetElement;
use crate::grid::Segment;
use crate::prelude::*;
use crate::utils::float_str;

use std::fmt;

/// Anything that can be stored in (or assigned to) a [`Field`](crate::Field).
///
/// `Array` and `IntArray` only ever appear as inputs: fields store raw arrays wrapped
/// in a [`Dataset2D`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<f64>),
    Point3D(Point3D),
    Dataset2D(Dataset2D),
    IntDataset2D(Dataset2D<i64>),
    Array(Array2<f64>),
    IntArray(Array2<i64>),
}

/// the storage type a field is locked to
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    #[display(fmt = "bool")]
    Bool,
    #[display(fmt = "int")]
    Int,
    #[display(fmt = "float")]
    Float,
    #[display(fmt = "str")]
    Str,
    #[display(fmt = "sequence")]
    Seq,
    #[display(fmt = "Point3D")]
    Point3D,
    #[display(fmt = "Dataset2D")]
    Dataset2D,
    #[display(fmt = "int Dataset2D")]
    IntDataset2D,
}

impl Value {
    /// type a field would lock to when constructed with this value
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::Seq(_) => ValueType::Seq,
            Value::Point3D(_) => ValueType::Point3D,
            Value::Dataset2D(_) | Value::Array(_) => ValueType::Dataset2D,
            Value::IntDataset2D(_) | Value::IntArray(_) => ValueType::IntDataset2D,
        }
    }

    /// raw arrays are only ever stored wrapped up
    pub(crate) fn into_stored(self) -> Value {
        match self {
            Value::Array(arr) => Value::Dataset2D(Dataset2D::new(arr)),
            Value::IntArray(arr) => Value::IntDataset2D(Dataset2D::new(arr)),
            other => other,
        }
    }

    /// whether this is the exact runtime variant of `value_type`
    pub(crate) fn is(&self, value_type: ValueType) -> bool {
        !matches!(self, Value::Array(_) | Value::IntArray(_)) && self.value_type() == value_type
    }
}

/// Renders the value the way it appears in solver input files.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => write!(f, "True"),
            Value::Bool(false) => write!(f, "False"),
            Value::Int(int) => write!(f, "{int}"),
            Value::Float(float) => write!(f, "{}", float_str(*float)),
            Value::Str(text) => write!(f, "{text}"),
            Value::Seq(values) => {
                let values: Vec<String> = values.iter().map(|x| float_str(*x)).collect();
                write!(f, "[{}]", values.join(", "))
            }
            Value::Point3D(point) => write!(f, "{point}"),
            Value::Dataset2D(data) => write_rows(f, data.arr()),
            Value::IntDataset2D(data) => write_rows(f, data.arr()),
            Value::Array(arr) => write_rows(f, arr),
            Value::IntArray(arr) => write_rows(f, arr),
        }
    }
}

fn write_rows<T: DatasetElement>(f: &mut fmt::Formatter<'_>, arr: &Array2<T>) -> fmt::Result {
    let rows: Vec<String> = arr
        .rows()
        .into_iter()
        .map(|row| {
            let row: Vec<String> = row.iter().map(DatasetElement::render).collect();
            format!("[{}]", row.join(" "))
        })
        .collect();
    write!(f, "[{}]", rows.join(" "))
}

impl From<bool> for Value {
    fn from(x: bool) -> Self {
        Value::Bool(x)
    }
}

macro_rules! int_value {
    ($($int:ty),*) => {
        $(
            impl From<$int> for Value {
                fn from(x: $int) -> Self {
                    Value::Int(x as i64)
                }
            }
        )*
    };
}

int_value!(i8, i16, i32, i64, u8, u16, u32, usize);

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<&str> for Value {
    fn from(x: &str) -> Self {
        Value::Str(x.to_string())
    }
}

impl From<String> for Value {
    fn from(x: String) -> Self {
        Value::Str(x)
    }
}

impl From<Vec<f64>> for Value {
    fn from(x: Vec<f64>) -> Self {
        Value::Seq(x)
    }
}

impl From<&[f64]> for Value {
    fn from(x: &[f64]) -> Self {
        Value::Seq(x.to_vec())
    }
}

impl From<[f64; 3]> for Value {
    fn from(x: [f64; 3]) -> Self {
        Value::Seq(x.to_vec())
    }
}

impl From<Point3D> for Value {
    fn from(x: Point3D) -> Self {
        Value::Point3D(x)
    }
}

impl From<Dataset2D> for Value {
    fn from(x: Dataset2D) -> Self {
        Value::Dataset2D(x)
    }
}

impl From<Dataset2D<i64>> for Value {
    fn from(x: Dataset2D<i64>) -> Self {
        Value::IntDataset2D(x)
    }
}

impl From<Array2<f64>> for Value {
    fn from(x: Array2<f64>) -> Self {
        Value::Array(x)
    }
}

impl From<Array2<i64>> for Value {
    fn from(x: Array2<i64>) -> Self {
        Value::IntArray(x)
    }
}

/// a grid segment is stored as a single column of coordinates
impl From<Segment> for Value {
    fn from(x: Segment) -> Self {
        let column = x.into_grid().insert_axis(ndarray::Axis(1));
        Value::Array(column)
    }
}

impl From<&Segment> for Value {
    fn from(x: &Segment) -> Self {
        Value::from(x.clone())
    }
}

/// assigning one field to another copies its value
impl From<&Field> for Value {
    fn from(x: &Field) -> Self {
        x.value().clone()
    }
}

#[test]
fn values_render_like_solver_files() {
    assert_eq!(Value::from(true).to_string(), "True");
    assert_eq!(Value::from(3).to_string(), "3");
    assert_eq!(Value::from(3.0).to_string(), "3.0");
    assert_eq!(Value::from("uniform").to_string(), "uniform");
    assert_eq!(Value::from(vec![1.0, 2.5]).to_string(), "[1.0, 2.5]");
    assert_eq!(Value::from(Point3D::new(1., 2., 3.)).to_string(), "1.0 2.0 3.0");
}

#[test]
fn arrays_lock_to_datasets() {
    let value = Value::from(Array2::<f64>::zeros((2, 1)));
    assert_eq!(value.value_type(), ValueType::Dataset2D);
    assert!(!value.is(ValueType::Dataset2D));
    assert!(value.into_stored().is(ValueType::Dataset2D));

    let conn = Value::from(ndarray::array![[1_i64, 2, 3]]);
    assert_eq!(conn.value_type(), ValueType::IntDataset2D);
    assert_eq!(conn.to_string(), "[[1 2 3]]");
    assert!(conn.into_stored().is(ValueType::IntDataset2D));
}
