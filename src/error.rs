//! detail types carried by the variants of [`Error`](crate::Error)

use crate::field::ValueType;
use derive_more::{Constructor, Display, Error};

#[derive(Display, Error, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "attempted to set {found} value `{value}` to field `{key}` holding {expected}")]
pub struct TypeMismatch {
    pub key: String,
    pub expected: ValueType,
    pub found: ValueType,
    pub value: String,
}

#[derive(Display, Error, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "expected a {expected} element, but encountered {found}")]
pub struct ElementMismatch {
    pub expected: String,
    pub found: String,
}

#[derive(Display, Error, Debug, Clone, PartialEq, Constructor)]
#[display(
    fmt = "name `{name}` not found. A group is a static schema and does not allow dynamic creation. Existing children: [{existing}]"
)]
pub struct UnknownName {
    pub name: String,
    pub existing: String,
}

#[derive(Display, Error, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "name `{name}` is a Group/List/Dict, not a settable Field")]
pub struct NotSettable {
    pub name: String,
}

#[derive(Display, Error, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "`{operation}` is not supported on this container, use `{use_instead}` instead")]
pub struct DirectMutation {
    pub operation: &'static str,
    pub use_instead: &'static str,
}

#[derive(Display, Error, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "{node} is not active, call `enable()` first")]
pub struct Inactive {
    pub node: String,
}

#[derive(Display, Error, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "index {index} is out of bounds for an axis of length {len} starting at {start_index}")]
pub struct OutOfBounds {
    pub index: usize,
    pub start_index: usize,
    pub len: usize,
}

#[derive(Display, Error, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "symbols `{first}` and `{second}` both map to `{value}`")]
pub struct NonInjectiveMap {
    pub value: String,
    pub first: String,
    pub second: String,
}

#[derive(Display, Error, Debug, Clone, PartialEq, Constructor)]
#[display(fmt = "cannot grow a segment over length {length} from a boundary spacing of {spacing}")]
pub struct Growth {
    pub length: f64,
    pub spacing: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn details_are_sources() {
        let err: crate::Error = Growth::new(1.0, 2.0).into();
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), err.to_string());
        assert!(source.downcast_ref::<Growth>().is_some());
    }
}
