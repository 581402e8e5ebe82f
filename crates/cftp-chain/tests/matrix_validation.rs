use cftp_chain::TransitionMatrix;
use cftp_core::{CftpError, StateIndex};

#[test]
fn accepts_a_valid_chain() {
    let matrix = TransitionMatrix::from_rows(vec![vec![0.5, 0.5], vec![0.25, 0.75]]).unwrap();
    assert_eq!(matrix.order(), 2);
    assert_eq!(matrix.entry(StateIndex::from_raw(1), StateIndex::from_raw(0)), 0.25);
    assert_eq!(matrix.row(StateIndex::from_raw(0)), &[0.5, 0.5]);
}

#[test]
fn rejects_zero_states() {
    let err = TransitionMatrix::from_rows(Vec::new()).unwrap_err();
    assert_eq!(err.info().code, "empty-matrix");
    assert!(matches!(err, CftpError::Matrix(_)));
}

#[test]
fn rejects_ragged_rows() {
    let err = TransitionMatrix::from_rows(vec![vec![1.0], vec![0.5, 0.5]]).unwrap_err();
    assert_eq!(err.info().code, "not-square");
}

#[test]
fn rejects_negative_and_non_finite_entries() {
    let err = TransitionMatrix::from_rows(vec![vec![1.5, -0.5], vec![0.5, 0.5]]).unwrap_err();
    assert_eq!(err.info().code, "bad-entry");

    let err =
        TransitionMatrix::from_rows(vec![vec![f64::NAN, 1.0], vec![0.5, 0.5]]).unwrap_err();
    assert_eq!(err.info().code, "bad-entry");
}

#[test]
fn rejects_rows_that_do_not_sum_to_one() {
    let err = TransitionMatrix::from_rows(vec![vec![0.4, 0.4], vec![0.5, 0.5]]).unwrap_err();
    assert_eq!(err.info().code, "row-sum");
    assert_eq!(err.info().context.get("row").map(String::as_str), Some("0"));
}

#[test]
fn tolerates_tiny_row_sum_rounding() {
    let rows = vec![vec![0.5, 0.5 - 1e-10], vec![0.5, 0.5]];
    assert!(TransitionMatrix::from_rows(rows).is_ok());
}

#[test]
fn identity_is_a_valid_chain() {
    let identity = TransitionMatrix::identity(3).unwrap();
    for state in 0..3 {
        let index = StateIndex::from_raw(state);
        assert_eq!(identity.entry(index, index), 1.0);
    }
    assert!(TransitionMatrix::identity(0).is_err());
}

#[test]
fn from_row_major_checks_dimensions() {
    let err = TransitionMatrix::from_row_major(2, vec![1.0, 0.0, 1.0]).unwrap_err();
    assert_eq!(err.info().code, "bad-dimensions");
}
