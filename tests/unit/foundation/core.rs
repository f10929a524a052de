use super::*;

fn b(x1: i64, x2: i64, y1: i64, y2: i64) -> Bounds {
    Bounds { x1, x2, y1, y2 }
}

#[test]
fn conflict_identical_rectangles() {
    assert!(conflict(b(1, 2, 1, 2), b(1, 2, 1, 2)));
}

#[test]
fn conflict_disjoint_rectangles() {
    assert!(!conflict(b(1, 2, 1, 2), b(-2, -1, -2, -1)));
}

#[test]
fn conflict_containment() {
    assert!(conflict(b(1, 10, 1, 10), b(2, 4, 2, 4)));
}

#[test]
fn conflict_partial_overlap() {
    assert!(conflict(b(0, 11, -1, 8), b(-1, 9, 0, 12)));
}

#[test]
fn conflict_crossing_without_corner_containment() {
    // Wide-short crossing narrow-tall; neither holds a corner of the other.
    assert!(conflict(b(0, 8, 2, 6), b(2, 6, 1, 7)));
}

#[test]
fn conflict_counts_boundary_touch() {
    assert!(conflict(b(0, 4, 0, 4), b(4, 8, 0, 4)));
    assert!(conflict(b(0, 4, 0, 4), b(4, 8, 4, 8)));
    assert!(!conflict(b(0, 4, 0, 4), b(5, 8, 0, 4)));
}

#[test]
fn conflict_is_symmetric() {
    let cases = [
        (b(1, 2, 1, 2), b(1, 2, 1, 2)),
        (b(1, 2, 1, 2), b(-2, -1, -2, -1)),
        (b(1, 10, 1, 10), b(2, 4, 2, 4)),
        (b(0, 11, -1, 8), b(-1, 9, 0, 12)),
        (b(0, 8, 2, 6), b(2, 6, 1, 7)),
    ];
    for (p, q) in cases {
        assert_eq!(conflict(p, q), conflict(q, p));
    }
}

#[test]
fn bounds_new_rejects_inverted_edges() {
    assert!(Bounds::new(2, 1, 0, 0).is_err());
    assert!(Bounds::new(0, 0, 2, 1).is_err());
    assert!(Bounds::new(0, 0, 0, 0).is_ok());
}

#[test]
fn translate_preserves_extent() {
    let r = Bounds::from_origin(3, -4, 7, 9);
    let moved = r.translate(-10, 5);
    assert_eq!(moved.width(), r.width());
    assert_eq!(moved.height(), r.height());
    assert_eq!(moved.x1, -7);
    assert_eq!(moved.y1, 1);
}
