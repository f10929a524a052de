use super::*;

fn spec(id: u64, width: f64, height: f64) -> ItemSpec {
    ItemSpec {
        id: ItemId(id),
        width,
        height,
    }
}

#[test]
fn padding_rounds_up_and_adds_margin() {
    let ws = Workspace::new(
        &[spec(41, 4.0, 4.0), spec(42, 6.0, 6.0), spec(49, 10.0, 8.0)],
        2,
    )
    .unwrap();
    assert_eq!(ws.dims(ItemId(41)), (6, 6));
    assert_eq!(ws.dims(ItemId(42)), (8, 8));
    assert_eq!(ws.dims(ItemId(49)), (12, 10));

    let ws = Workspace::new(&[spec(1, 4.5, 3.2)], 2).unwrap();
    assert_eq!(ws.dims(ItemId(1)), (7, 6));
}

#[test]
fn true_dimensions_are_retained() {
    let ws = Workspace::new(&[spec(1, 4.5, 3.2)], 2).unwrap();
    let item = ws.item(ItemId(1)).unwrap();
    assert_eq!(item.true_width, 4.5);
    assert_eq!(item.true_height, 3.2);
    assert!(item.bounds.is_none());
}

#[test]
fn zero_margin_is_allowed() {
    let ws = Workspace::new(&[spec(1, 3.0, 3.0)], 0).unwrap();
    assert_eq!(ws.dims(ItemId(1)), (3, 3));
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(
        Workspace::new(&[], 2),
        Err(WalleryError::InvalidInput(_))
    ));
}

#[test]
fn non_positive_dimensions_are_rejected() {
    assert!(Workspace::new(&[spec(1, 0.0, 4.0)], 2).is_err());
    assert!(Workspace::new(&[spec(1, 4.0, -1.0)], 2).is_err());
    assert!(Workspace::new(&[spec(1, f64::NAN, 4.0)], 2).is_err());
    assert!(Workspace::new(&[spec(1, 4.0, f64::INFINITY)], 2).is_err());
}

#[test]
fn duplicate_ids_are_rejected() {
    assert!(Workspace::new(&[spec(1, 2.0, 2.0), spec(1, 3.0, 3.0)], 2).is_err());
}

#[test]
fn negative_margin_is_rejected() {
    assert!(Workspace::new(&[spec(1, 2.0, 2.0)], -1).is_err());
}

#[test]
fn orderings_are_ascending() {
    let ws = Workspace::new(
        &[spec(1, 10.0, 2.0), spec(2, 3.0, 9.0), spec(3, 5.0, 5.0)],
        2,
    )
    .unwrap();

    let areas: Vec<i64> = ws
        .order_by_area()
        .iter()
        .map(|&id| ws.item(id).unwrap().area())
        .collect();
    assert!(areas.is_sorted());

    let widths: Vec<i64> = ws
        .order_by_width()
        .iter()
        .map(|&id| ws.dims(id).0)
        .collect();
    assert!(widths.is_sorted());

    let heights: Vec<i64> = ws
        .order_by_height()
        .iter()
        .map(|&id| ws.dims(id).1)
        .collect();
    assert!(heights.is_sorted());
}

#[test]
fn count_matches_input() {
    let ws = Workspace::new(&[spec(1, 1.0, 1.0), spec(2, 2.0, 2.0)], 2).unwrap();
    assert_eq!(ws.count(), 2);
}
