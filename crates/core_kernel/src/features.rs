//! Feature schema and transaction input
//!
//! The classification service expects exactly 30 numeric features per
//! transaction: the elapsed time, the amount, and the 28 PCA components
//! `V1`..`V28`. The schema is fixed; inputs never carry other keys.

use std::collections::HashMap;

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// The 30 required feature names, in schema order.
///
/// `Time` and `Amount` are collected on the first wizard step, `V1`..`V28`
/// on the second.
pub static REQUIRED_KEYS: [&str; 30] = [
    "Time", "Amount", "V1", "V2", "V3", "V4", "V5", "V6", "V7", "V8", "V9", "V10", "V11", "V12",
    "V13", "V14", "V15", "V16", "V17", "V18", "V19", "V20", "V21", "V22", "V23", "V24", "V25",
    "V26", "V27", "V28",
];

/// Returns true if `name` is one of the 30 schema keys.
pub fn is_required_key(name: &str) -> bool {
    REQUIRED_KEYS.contains(&name)
}

/// The feature map for a single transaction.
///
/// Values accumulate monotonically while the user edits: a field is only
/// ever overwritten, never removed. A partial map is a valid editing state;
/// only a complete map may be submitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionInput {
    values: HashMap<String, f64>,
}

impl TransactionInput {
    /// Creates an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a feature value.
    ///
    /// Returns false without storing anything when `name` is not part of the
    /// schema or `value` is not finite.
    pub fn set(&mut self, name: &str, value: f64) -> bool {
        if !is_required_key(name) || !value.is_finite() {
            return false;
        }
        self.values.insert(name.to_string(), value);
        true
    }

    /// Returns the stored value for a feature, if any
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of features currently set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no feature has been set yet
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True iff every required key maps to a finite value
    pub fn is_complete(&self) -> bool {
        REQUIRED_KEYS
            .iter()
            .all(|key| self.values.get(*key).is_some_and(|v| v.is_finite()))
    }

    /// The required keys not yet set, in schema order
    pub fn missing_keys(&self) -> Vec<&'static str> {
        REQUIRED_KEYS
            .iter()
            .filter(|key| !self.values.contains_key(**key))
            .copied()
            .collect()
    }
}

impl Serialize for TransactionInput {
    /// Serializes as a JSON object with keys emitted in schema order
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for key in REQUIRED_KEYS.iter() {
            if let Some(value) = self.values.get(*key) {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TransactionInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, f64>::deserialize(deserializer)?;
        let mut input = TransactionInput::new();
        for (name, value) in raw {
            input.set(&name, value);
        }
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_has_thirty_keys() {
        assert_eq!(REQUIRED_KEYS.len(), 30);
        assert_eq!(REQUIRED_KEYS[0], "Time");
        assert_eq!(REQUIRED_KEYS[1], "Amount");
        assert_eq!(REQUIRED_KEYS[2], "V1");
        assert_eq!(REQUIRED_KEYS[29], "V28");
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut input = TransactionInput::new();
        assert!(!input.set("V29", 1.0));
        assert!(!input.set("amount", 1.0));
        assert!(input.is_empty());
    }

    #[test]
    fn test_set_rejects_non_finite_value() {
        let mut input = TransactionInput::new();
        assert!(!input.set("Amount", f64::NAN));
        assert!(!input.set("Amount", f64::INFINITY));
        assert!(input.get("Amount").is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let mut input = TransactionInput::new();
        assert!(input.set("Amount", 10.0));
        assert!(input.set("Amount", 20.0));
        assert_eq!(input.get("Amount"), Some(20.0));
        assert_eq!(input.len(), 1);
    }

    #[test]
    fn test_missing_keys_in_schema_order() {
        let mut input = TransactionInput::new();
        input.set("V1", 0.5);
        input.set("Time", 100.0);

        let missing = input.missing_keys();
        assert_eq!(missing.len(), 28);
        assert_eq!(missing[0], "Amount");
        assert_eq!(missing[1], "V2");
        assert!(!input.is_complete());
    }

    #[test]
    fn test_complete_input() {
        let mut input = TransactionInput::new();
        for key in REQUIRED_KEYS.iter() {
            input.set(key, 1.0);
        }
        assert!(input.is_complete());
        assert!(input.missing_keys().is_empty());
    }

    #[test]
    fn test_serializes_in_schema_order() {
        let mut input = TransactionInput::new();
        for key in REQUIRED_KEYS.iter() {
            input.set(key, 0.25);
        }

        let json = serde_json::to_string(&input).unwrap();
        let time_pos = json.find("\"Time\"").unwrap();
        let amount_pos = json.find("\"Amount\"").unwrap();
        let v1_pos = json.find("\"V1\"").unwrap();
        assert!(time_pos < amount_pos);
        assert!(amount_pos < v1_pos);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 30);
    }

    #[test]
    fn test_deserialize_drops_unknown_keys() {
        let input: TransactionInput =
            serde_json::from_str(r#"{"Time": 1.0, "Amount": 2.0, "Extra": 3.0}"#).unwrap();
        assert_eq!(input.len(), 2);
        assert!(input.get("Extra").is_none());
    }
}
