use cftp_core::errors::{CftpError, ErrorInfo};

/// Total variation distance between two probability vectors.
///
/// Half the L1 distance; bounds the largest difference in probability the
/// two distributions assign to any event. The vectors must be non-empty and
/// of equal length.
pub fn variation_distance(p: &[f64], q: &[f64]) -> Result<f64, CftpError> {
    if p.is_empty() || q.is_empty() {
        return Err(CftpError::Distribution(ErrorInfo::new(
            "empty-distribution",
            "variation distance needs at least one probability",
        )));
    }
    if p.len() != q.len() {
        return Err(CftpError::Distribution(
            ErrorInfo::new("length-mismatch", "distributions have different lengths")
                .with_context("left", p.len().to_string())
                .with_context("right", q.len().to_string()),
        ));
    }
    let l1: f64 = p.iter().zip(q).map(|(a, b)| (a - b).abs()).sum();
    Ok(l1 / 2.0)
}
