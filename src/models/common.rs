//! Shared models: point identifiers, consistency hints and query parameters.

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Point identifiers
// ---------------------------------------------------------------------------

/// Identifier of a point: an unsigned integer or a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointId {
    Num(u64),
    Uuid(Uuid),
}

impl From<u64> for PointId {
    fn from(id: u64) -> Self {
        PointId::Num(id)
    }
}

impl From<Uuid> for PointId {
    fn from(id: Uuid) -> Self {
        PointId::Uuid(id)
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointId::Num(id) => write!(f, "{id}"),
            PointId::Uuid(id) => write!(f, "{id}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Consistency hints
// ---------------------------------------------------------------------------

/// Ordering guarantee requested for a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOrdering {
    Weak,
    Medium,
    Strong,
}

/// Read consistency: a replica count or a named quorum level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadConsistency {
    Factor(u64),
    Majority,
    Quorum,
    All,
}

impl Serialize for ReadConsistency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ReadConsistency::Factor(n) => serializer.serialize_u64(*n),
            ReadConsistency::Majority => serializer.serialize_str("majority"),
            ReadConsistency::Quorum => serializer.serialize_str("quorum"),
            ReadConsistency::All => serializer.serialize_str("all"),
        }
    }
}

// ---------------------------------------------------------------------------
// Query strings
// ---------------------------------------------------------------------------

/// `?wait=&ordering=` for mutating operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WriteParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<WriteOrdering>,
}

/// `?consistency=` for reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReadParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency: Option<ReadConsistency>,
}

impl ReadParams {
    pub fn new(consistency: Option<ReadConsistency>) -> Self {
        Self { consistency }
    }
}

/// `?wait=` alone, used by snapshot recovery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WaitParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait: Option<bool>,
}

/// `?force=` for peer removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ForceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force: Option<bool>,
}

/// `?anonymize=` for telemetry and metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnonymizeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anonymize: Option<bool>,
}

/// No query parameters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoParams {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_point_id_serializes_untagged() {
        let uuid = Uuid::parse_str("5c56c793-69f3-4fbf-87e6-c4bf54c28c26").unwrap();
        assert_eq!(serde_json::to_value(PointId::from(7)).unwrap(), json!(7));
        assert_eq!(
            serde_json::to_value(PointId::from(uuid)).unwrap(),
            json!("5c56c793-69f3-4fbf-87e6-c4bf54c28c26")
        );
        assert_eq!(PointId::from(uuid).to_string(), uuid.to_string());
    }

    #[test]
    fn test_read_consistency_values() {
        assert_eq!(
            serde_json::to_value(ReadConsistency::Factor(2)).unwrap(),
            json!(2)
        );
        assert_eq!(
            serde_json::to_value(ReadConsistency::Quorum).unwrap(),
            json!("quorum")
        );
    }

    #[test]
    fn test_write_params_keep_explicit_false() {
        let params = WriteParams {
            wait: Some(false),
            ordering: None,
        };
        assert_eq!(serde_json::to_value(params).unwrap(), json!({ "wait": false }));
        assert_eq!(serde_json::to_value(WriteParams::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_write_ordering_lowercase() {
        assert_eq!(
            serde_json::to_value(WriteOrdering::Strong).unwrap(),
            json!("strong")
        );
    }
}
