use grex_core::{GraphError, Matrix};
use grex_graph::{ribs, ribs_checked};

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

fn staircase_seven() -> Matrix {
    Matrix::from_rows(&[
        vec![0, 1, 1, 1, 1, 1, 1],
        vec![1, 0, 1, 1, 1, 1, 0],
        vec![1, 1, 0, 1, 1, 0, 0],
        vec![1, 1, 1, 0, 0, 0, 0],
        vec![1, 1, 1, 0, 0, 0, 0],
        vec![1, 1, 0, 0, 0, 0, 0],
        vec![1, 0, 0, 0, 0, 0, 0],
    ])
    .unwrap()
}

#[test]
fn ribs_are_listed_row_by_row_with_descending_partners() {
    let edges = ribs(&staircase_five(), false).unwrap();
    assert_eq!(edges, vec![(0, 4), (0, 3), (0, 2), (0, 1), (1, 3), (1, 2)]);
}

#[test]
fn seven_vertex_staircase_lists_all_twelve_ribs() {
    let edges = ribs(&staircase_seven(), false).unwrap();
    assert_eq!(edges.len(), 12);
    assert_eq!(
        edges,
        vec![
            (0, 6),
            (0, 5),
            (0, 4),
            (0, 3),
            (0, 2),
            (0, 1),
            (1, 5),
            (1, 4),
            (1, 3),
            (1, 2),
            (2, 4),
            (2, 3),
        ]
    );
}

#[test]
fn inverse_flag_swaps_the_pair_order() {
    let edges = ribs(&staircase_five(), true).unwrap();
    assert_eq!(edges, vec![(4, 0), (3, 0), (2, 0), (1, 0), (3, 1), (2, 1)]);
}

#[test]
fn half_range_scan_skips_upper_half_edges() {
    // Complete graph on four vertices: the scan stops before row 2, so the
    // (2, 3) edge is never visited and five of the six edges are reported.
    let complete = Matrix::from_rows(&[
        vec![0, 1, 1, 1],
        vec![1, 0, 1, 1],
        vec![1, 1, 0, 1],
        vec![1, 1, 1, 0],
    ])
    .unwrap();
    let edges = ribs(&complete, false).unwrap();
    assert_eq!(edges, vec![(0, 3), (0, 2), (0, 1), (1, 3), (1, 2)]);
}

#[test]
fn extraction_validates_first() {
    let matrix = Matrix::from_rows(&[vec![0, 2], vec![2, 0]]).unwrap();
    let err = ribs(&matrix, false).unwrap_err();
    assert_eq!(
        err,
        GraphError::MultiEdgeEntry {
            row: 0,
            col: 1,
            value: 2,
        }
    );

    let checked = ribs_checked(&matrix, false);
    assert!(!checked.ok);
    assert!(checked.value.is_empty());
    assert_eq!(checked.diagnostic, err.to_string());
}
