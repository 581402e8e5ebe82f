use crate::matrix::TransitionMatrix;

/// Raises a transition matrix to an integer power by repeated squaring.
///
/// `exponent == 0` yields the identity. Products of row-stochastic matrices
/// are row-stochastic, so intermediate results skip re-validation. Used as
/// the approximation oracle for the stationary distribution (a large fixed
/// power of the matrix), not for sampling.
pub fn matrix_power(matrix: &TransitionMatrix, exponent: u32) -> TransitionMatrix {
    let mut accumulator = identity_unchecked(matrix.order());
    let mut base = matrix.clone();
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining % 2 == 1 {
            accumulator = multiply(&accumulator, &base);
            remaining -= 1;
        } else {
            base = multiply(&base, &base);
            remaining /= 2;
        }
    }
    accumulator
}

fn identity_unchecked(order: usize) -> TransitionMatrix {
    let mut entries = vec![0.0; order * order];
    for state in 0..order {
        entries[state * order + state] = 1.0;
    }
    TransitionMatrix::from_parts_unchecked(order, entries)
}

fn multiply(a: &TransitionMatrix, b: &TransitionMatrix) -> TransitionMatrix {
    let order = a.order();
    let lhs = a.as_row_major();
    let rhs = b.as_row_major();
    let mut entries = vec![0.0; order * order];
    for row in 0..order {
        for mid in 0..order {
            let scale = lhs[row * order + mid];
            if scale == 0.0 {
                continue;
            }
            for column in 0..order {
                entries[row * order + column] += scale * rhs[mid * order + column];
            }
        }
    }
    TransitionMatrix::from_parts_unchecked(order, entries)
}
