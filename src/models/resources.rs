use serde::Deserialize;
use serde_json::Value;

/// The fixed resource columns shown in every allocation table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Cores,
    Gpus,
    Memory,
    Disk,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Cores,
        Resource::Gpus,
        Resource::Memory,
        Resource::Disk,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Cores => "cores",
            Resource::Gpus => "gpus",
            Resource::Memory => "memory",
            Resource::Disk => "disk",
        }
    }

    /// Memory and disk are reported by the manager in megabytes.
    pub fn is_storage(&self) -> bool {
        matches!(self, Resource::Memory | Resource::Disk)
    }
}

/// A raw value as reported by the manager, classified once at the boundary.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum Quantity {
    #[default]
    Missing,
    Negative(f64),
    NonNumeric(String),
    Numeric(f64),
}

impl Quantity {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Quantity::Numeric(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        if value < 0.0 {
            Quantity::Negative(value)
        } else {
            Quantity::Numeric(value)
        }
    }
}

impl From<Value> for Quantity {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Quantity::Missing,
            Value::Number(n) => match n.as_f64() {
                Some(v) => Quantity::from(v),
                None => Quantity::NonNumeric(n.to_string()),
            },
            Value::String(s) => Quantity::NonNumeric(s),
            other => Quantity::NonNumeric(other.to_string()),
        }
    }
}

impl From<&Value> for Quantity {
    fn from(value: &Value) -> Self {
        Quantity::from(value.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ResourceSet {
    pub cores: Quantity,
    pub gpus: Quantity,
    pub memory: Quantity,
    pub disk: Quantity,
}

impl ResourceSet {
    pub fn get(&self, resource: Resource) -> &Quantity {
        match resource {
            Resource::Cores => &self.cores,
            Resource::Gpus => &self.gpus,
            Resource::Memory => &self.memory,
            Resource::Disk => &self.disk,
        }
    }

    /// True when any resource observed here is above a bounded limit in `limits`.
    /// Missing or negative limits mean "whole worker" and never count as exceeded.
    pub fn exceeds(&self, limits: &ResourceSet) -> bool {
        Resource::ALL.iter().any(|r| {
            match (self.get(*r).as_numeric(), limits.get(*r).as_numeric()) {
                (Some(seen), Some(limit)) => seen > limit,
                _ => false,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_quantity_from_json() {
        assert_eq!(Quantity::from(json!(null)), Quantity::Missing);
        assert_eq!(Quantity::from(json!(-1)), Quantity::Negative(-1.0));
        assert_eq!(Quantity::from(json!(4)), Quantity::Numeric(4.0));
        assert_eq!(
            Quantity::from(json!("whole")),
            Quantity::NonNumeric("whole".to_string())
        );
        assert_eq!(
            Quantity::from(json!(true)),
            Quantity::NonNumeric("true".to_string())
        );
    }

    #[test]
    fn test_resource_set_missing_keys() {
        let set: ResourceSet = serde_json::from_value(json!({"cores": 2, "memory": null})).unwrap();
        assert_eq!(set.cores, Quantity::Numeric(2.0));
        assert_eq!(set.gpus, Quantity::Missing);
        assert_eq!(set.memory, Quantity::Missing);
        assert_eq!(set.disk, Quantity::Missing);
    }

    #[test]
    fn test_exceeds_ignores_unbounded_limits() {
        let seen: ResourceSet =
            serde_json::from_value(json!({"cores": 8, "memory": 4000})).unwrap();
        let unbounded: ResourceSet =
            serde_json::from_value(json!({"cores": -1, "memory": 8000})).unwrap();
        let tight: ResourceSet = serde_json::from_value(json!({"cores": 4})).unwrap();

        assert!(!seen.exceeds(&unbounded));
        assert!(seen.exceeds(&tight));
    }

    #[test]
    fn test_resource_order() {
        let names: Vec<&str> = Resource::ALL.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["cores", "gpus", "memory", "disk"]);
    }
}
