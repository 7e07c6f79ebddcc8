use thiserror::Error;

/// Failures raised while building or persisting a snapshot.
///
/// Aggregations never produce these: an empty record set is a valid input
/// that degrades to zero-valued results.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("record {record}: unknown {field} value {value:?}")]
    UnknownValue {
        record: String,
        field: &'static str,
        value: String,
    },

    #[error("record {record}: {field} value {value} is out of range")]
    OutOfRange {
        record: String,
        field: &'static str,
        value: f64,
    },

    #[error("duplicate vehicle id {0}")]
    DuplicateId(String),

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
}

impl FleetError {
    /// True for violations of the record invariants, as opposed to failures
    /// reading or decoding the snapshot source.
    pub const fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            Self::UnknownValue { .. } | Self::OutOfRange { .. } | Self::DuplicateId(_)
        )
    }
}
