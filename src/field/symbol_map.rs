use super::Value;
use crate::prelude::*;

/// Ordered pairs translating a symbolic name into the code the solver expects, for
/// example `{"uniform": 1, "nonuniform": 2}`.
///
/// The mapping is injective, so every stored code can be traced back to exactly one
/// symbol.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SymbolMap {
    pairs: Vec<(Value, Value)>,
}

impl SymbolMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// build a map from `(symbol, value)` pairs, rejecting duplicated values
    ///
    /// ```
    /// use vicar::SymbolMap;
    ///
    /// let flow = SymbolMap::from_pairs([("viscous", 1), ("potential", 2)]).unwrap();
    /// assert_eq!(flow.len(), 2);
    ///
    /// assert!(SymbolMap::from_pairs([("viscous", 1), ("inviscid", 1)]).is_err());
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        let mut map = Self::new();

        for (symbol, value) in pairs {
            let symbol = symbol.into();
            let value = value.into().into_stored();

            if let Some(first) = map.reverse(&value) {
                return Err(error::NonInjectiveMap::new(
                    value.to_string(),
                    first.to_string(),
                    symbol.to_string(),
                )
                .into());
            }

            // a repeated symbol replaces its previous value
            map.pairs.retain(|(existing, _)| existing != &symbol);
            map.pairs.push((symbol, value));
        }

        Ok(map)
    }

    /// `False -> 0`, `True -> 1`
    pub fn bool_to_int() -> Self {
        Self {
            pairs: vec![
                (Value::Bool(false), Value::Int(0)),
                (Value::Bool(true), Value::Int(1)),
            ],
        }
    }

    /// `x -> 1`, `y -> 2`, `z -> 3`
    pub fn xyz_to_int() -> Self {
        Self {
            pairs: vec![
                (Value::from("x"), Value::Int(1)),
                (Value::from("y"), Value::Int(2)),
                (Value::from("z"), Value::Int(3)),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// value a symbol maps to
    pub fn forward(&self, symbol: &Value) -> Option<&Value> {
        self.pairs
            .iter()
            .find(|(key, _)| key == symbol)
            .map(|(_, value)| value)
    }

    /// symbol a value was mapped from
    pub fn reverse(&self, value: &Value) -> Option<&Value> {
        self.pairs
            .iter()
            .find(|(_, mapped)| mapped == value)
            .map(|(symbol, _)| symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.pairs.iter().map(|(symbol, value)| (symbol, value))
    }

    /// `symbol: value` pairs joined by commas
    pub fn forward_str(&self) -> String {
        self.iter()
            .map(|(symbol, value)| format!("{symbol}: {value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `value: symbol` pairs joined by commas, as printed next to keys
    pub fn reverse_str(&self) -> String {
        self.iter()
            .map(|(symbol, value)| format!("{value}: {symbol}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[test]
fn presets_round_trip() {
    let map = SymbolMap::bool_to_int();
    assert_eq!(map.forward(&Value::Bool(true)), Some(&Value::Int(1)));
    assert_eq!(map.reverse(&Value::Int(0)), Some(&Value::Bool(false)));
    assert_eq!(map.reverse_str(), "0: False, 1: True");

    let map = SymbolMap::xyz_to_int();
    assert_eq!(map.forward(&Value::from("z")), Some(&Value::Int(3)));
    assert_eq!(map.forward_str(), "x: 1, y: 2, z: 3");
}

#[test]
fn duplicated_values_are_rejected() {
    let err = SymbolMap::from_pairs([("a", 1), ("b", 2), ("c", 1)]).unwrap_err();
    match err {
        Error::NonInjectiveMap(detail) => {
            assert_eq!(detail.first, "a");
            assert_eq!(detail.second, "c");
        }
        other => panic!("unexpected error {other}"),
    }
}
