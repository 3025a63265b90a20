use crate::prelude::*;

use std::fmt;

#[derive(Constructor, Clone, Copy, PartialEq, Debug, Default)]
/// A point in space, always stored as three floats
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn xyz(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    pub fn set_xyz(&mut self, [x, y, z]: [f64; 3]) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// build a point from anything yielding exactly three numbers
    pub fn try_from_iter<I, T>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<f64>,
    {
        let values: Vec<f64> = values.into_iter().map(Into::into).collect();
        match values.as_slice() {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            other => Err(Error::PointLength(other.len())),
        }
    }

    /// the point as a 1x3 dataset, which is how it is written to tabular files
    pub fn to_dataset(&self) -> Dataset2D {
        let xyz = self.xyz();
        Dataset2D::new(Array2::from_shape_fn((1, 3), |(_, j)| xyz[j]))
    }
}

impl From<[f64; 3]> for Point3D {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl TryFrom<&[f64]> for Point3D {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::try_from_iter(values.iter().copied())
    }
}

impl fmt::Display for Point3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            crate::utils::float_str(self.x),
            crate::utils::float_str(self.y),
            crate::utils::float_str(self.z)
        )
    }
}

/// a point behaves like a single row holding x, y and z
impl ArrayAccess for Point3D {
    fn shape(&self) -> (usize, usize) {
        (1, 3)
    }

    fn start_index(&self) -> usize {
        1
    }

    fn get(&self, i: usize, j: usize) -> Result<f64, Error> {
        if i != 1 {
            return Err(error::OutOfBounds::new(i, 1, 1).into());
        }
        match j {
            1 => Ok(self.x),
            2 => Ok(self.y),
            3 => Ok(self.z),
            _ => Err(error::OutOfBounds::new(j, 1, 3).into()),
        }
    }

    fn set(&mut self, i: usize, j: usize, value: f64) -> Result<(), Error> {
        if i != 1 {
            return Err(error::OutOfBounds::new(i, 1, 1).into());
        }
        match j {
            1 => self.x = value,
            2 => self.y = value,
            3 => self.z = value,
            _ => return Err(error::OutOfBounds::new(j, 1, 3).into()),
        }
        Ok(())
    }
}

#[test]
fn point_from_values() {
    let point = Point3D::try_from([1.0, 2.0, 3.0].as_slice()).unwrap();
    assert_eq!(point.xyz(), [1.0, 2.0, 3.0]);
    assert_eq!(point.to_string(), "1.0 2.0 3.0");

    let point = Point3D::try_from_iter([1i32, 2, 3]).unwrap();
    assert_eq!(point, Point3D::new(1.0, 2.0, 3.0));

    let err = Point3D::try_from([1.0, 2.0].as_slice()).unwrap_err();
    assert!(matches!(err, Error::PointLength(2)));
}

#[test]
fn point_as_single_row() {
    let point = Point3D::new(0.5, 1.5, 2.5);
    assert_eq!(ArrayAccess::get(&point, 1, 3).unwrap(), 2.5);
    assert!(ArrayAccess::get(&point, 2, 1).is_err());

    let data = point.to_dataset();
    assert_eq!(data.shape(), (1, 3));
    assert_eq!(data[(1, 2)], 1.5);
}
