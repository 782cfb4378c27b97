use indexmap::IndexMap;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsShapeError {
    #[error("application values must be a mapping, found {0}")]
    ValuesNotMapping(&'static str),

    #[error("application units must be a mapping, found {0}")]
    UnitsNotMapping(&'static str),

    #[error("unit of '{0}' is not a string")]
    UnitNotString(String),
}

/// Application-defined metrics, in the order the application declared them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationMetrics {
    pub values: IndexMap<String, Value>,
    pub units: IndexMap<String, String>,
}

impl ApplicationMetrics {
    /// Reads `{"application_info": {"values": {..}, "units": {..}}}`.
    ///
    /// Returns `Ok(None)` when the payload carries no values at all, and an error when
    /// the values or units are present but not shaped as mappings.
    pub fn from_payload(payload: &Value) -> Result<Option<Self>, MetricsShapeError> {
        let Some(info) = payload.get("application_info") else {
            return Ok(None);
        };
        let values = match info.get("values") {
            None | Some(Value::Null) => return Ok(None),
            Some(Value::Object(values)) => values,
            Some(other) => return Err(MetricsShapeError::ValuesNotMapping(kind_of(other))),
        };

        let mut units = IndexMap::new();
        match info.get("units") {
            None | Some(Value::Null) => {}
            Some(Value::Object(declared)) => {
                for (name, unit) in declared {
                    match unit {
                        Value::String(unit) => {
                            units.insert(name.clone(), unit.clone());
                        }
                        Value::Null => {}
                        _ => return Err(MetricsShapeError::UnitNotString(name.clone())),
                    }
                }
            }
            Some(other) => return Err(MetricsShapeError::UnitsNotMapping(kind_of(other))),
        }

        Ok(Some(Self {
            values: values.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            units,
        }))
    }

    pub fn unit(&self, name: &str) -> Option<&str> {
        self.units
            .get(name)
            .map(|u| u.as_str())
            .filter(|u| !u.is_empty())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
