use grex_core::{GraphError, Matrix};
use grex_graph::{
    adjacency_from_signature, bases, bases_checked, bases_to_signature, signature_of,
    signature_of_checked, BaseOptions,
};

fn staircase_five() -> Matrix {
    Matrix::from_rows(&[
        vec![0, 1, 1, 1, 1],
        vec![1, 0, 1, 1, 0],
        vec![1, 1, 0, 0, 0],
        vec![1, 1, 0, 0, 0],
        vec![1, 0, 0, 0, 0],
    ])
    .unwrap()
}

// Valid adjacency matrix whose first row has a gap between its 1-runs.
fn gapped_five() -> Matrix {
    Matrix::from_rows(&[
        vec![0, 0, 1, 0, 1],
        vec![0, 0, 0, 0, 0],
        vec![1, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0],
        vec![1, 0, 0, 0, 0],
    ])
    .unwrap()
}

#[test]
fn bases_mark_the_boundary_breakpoints() {
    let pairs = bases(&staircase_five(), &BaseOptions::default()).unwrap();
    assert_eq!(pairs, vec![(0, 4)]);

    let seven = adjacency_from_signature(42).unwrap();
    let pairs = bases(&seven, &BaseOptions::default()).unwrap();
    assert_eq!(pairs, vec![(0, 6), (1, 5)]);
}

#[test]
fn inverse_flag_swaps_base_pairs() {
    let seven = adjacency_from_signature(42).unwrap();
    let options = BaseOptions {
        extreme: true,
        inverse: true,
    };
    assert_eq!(bases(&seven, &options).unwrap(), vec![(6, 0), (5, 1)]);
}

#[test]
fn gapped_rows_fail_the_extremal_check() {
    let err = bases(&gapped_five(), &BaseOptions::default()).unwrap_err();
    assert_eq!(err, GraphError::NotExtremalShape { row: 0 });

    let checked = bases_checked(&gapped_five(), &BaseOptions::default());
    assert!(!checked.ok);
    assert!(checked.value.is_empty());
}

#[test]
fn tolerant_mode_reports_no_bases_for_gapped_rows() {
    let options = BaseOptions {
        extreme: false,
        inverse: false,
    };
    assert_eq!(bases(&gapped_five(), &options).unwrap(), Vec::new());
}

#[test]
fn signature_encodes_the_boundary_walk() {
    assert_eq!(signature_of(&staircase_five()).unwrap(), 10);
    assert_eq!(adjacency_from_signature(10).unwrap(), staircase_five());
}

#[test]
fn decoded_signature_has_the_expected_degrees() {
    let matrix = adjacency_from_signature(42).unwrap();
    assert_eq!(matrix.rows(), 7);
    let degrees: Vec<u32> = (0..7).map(|i| matrix.row(i).iter().sum()).collect();
    assert_eq!(degrees, vec![6, 5, 4, 3, 3, 2, 1]);
    assert_eq!(signature_of(&matrix).unwrap(), 42);
}

#[test]
fn gapped_rows_fail_signature_encoding() {
    let err = signature_of(&gapped_five()).unwrap_err();
    assert_eq!(err, GraphError::NotExtremalShape { row: 0 });

    let checked = signature_of_checked(&gapped_five());
    assert!(!checked.ok);
    assert_eq!(checked.value, 0);
}

#[test]
fn oversized_matrices_overflow_the_signature() {
    let err = signature_of(&Matrix::square(66)).unwrap_err();
    assert_eq!(err, GraphError::SignatureOverflow { vertices: 66 });
}

#[test]
fn non_square_matrices_cannot_be_encoded() {
    let err = signature_of(&Matrix::zeros(3, 4)).unwrap_err();
    assert_eq!(err, GraphError::NotSquare { rows: 3, cols: 4 });
}

#[test]
fn base_lists_walk_back_to_a_signature() {
    // Bases carry only the breakpoints, so the rebuilt walk flattens the
    // trailing steps: the staircase behind signature 42 reports bases
    // (0, 6) and (1, 5), which walk back to 40.
    assert_eq!(bases_to_signature(&[(0, 6), (1, 5)]).unwrap(), 40);
}

#[test]
fn degenerate_base_lists_are_rejected() {
    assert_eq!(
        bases_to_signature(&[]).unwrap_err(),
        GraphError::EmptyOrInvalidBases
    );
    assert_eq!(
        bases_to_signature(&[(0, 4), (1, -1)]).unwrap_err(),
        GraphError::EmptyOrInvalidBases
    );
}
