use cftp_core::errors::{CftpError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::matrix::TransitionMatrix;

/// Serializes the matrix to a compact binary representation using `bincode`.
pub fn matrix_to_bytes(matrix: &TransitionMatrix) -> Result<Vec<u8>, CftpError> {
    let serializable = SerializableMatrix::from_matrix(matrix);
    bincode::serialize(&serializable)
        .map_err(|err| CftpError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a matrix from its binary representation, re-validating the rows.
pub fn matrix_from_bytes(bytes: &[u8]) -> Result<TransitionMatrix, CftpError> {
    let serializable: SerializableMatrix = bincode::deserialize(bytes)
        .map_err(|err| CftpError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_matrix()
}

/// Serializes the matrix to a JSON string.
pub fn matrix_to_json(matrix: &TransitionMatrix) -> Result<String, CftpError> {
    let serializable = SerializableMatrix::from_matrix(matrix);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| CftpError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a matrix from a JSON string, re-validating the rows.
pub fn matrix_from_json(json: &str) -> Result<TransitionMatrix, CftpError> {
    let serializable: SerializableMatrix = serde_json::from_str(json)
        .map_err(|err| CftpError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_matrix()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableMatrix {
    order: usize,
    entries: Vec<f64>,
}

impl SerializableMatrix {
    fn from_matrix(matrix: &TransitionMatrix) -> Self {
        Self {
            order: matrix.order(),
            entries: matrix.as_row_major().to_vec(),
        }
    }

    fn into_matrix(self) -> Result<TransitionMatrix, CftpError> {
        TransitionMatrix::from_row_major(self.order, self.entries)
    }
}
