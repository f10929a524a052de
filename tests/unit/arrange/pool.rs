use super::*;
use crate::workspace::model::ItemSpec;

fn ws() -> Workspace {
    // Widths 3..8, heights chosen so area and height orders differ.
    let specs: Vec<ItemSpec> = (0..6)
        .map(|k| ItemSpec {
            id: ItemId(k),
            width: 3.0 + k as f64,
            height: 8.0 - k as f64,
        })
        .collect();
    Workspace::new(&specs, 2).unwrap()
}

#[test]
fn pop_tallest_takes_max_height() {
    let ws = ws();
    let mut pool = Pool::new(&ws);
    let id = pool.pop_tallest(&ws).unwrap();
    assert_eq!(id, ItemId(0));
    assert_eq!(pool.len(), 5);
}

#[test]
fn pop_widest_takes_max_width() {
    let ws = ws();
    let mut pool = Pool::new(&ws);
    let id = pool.pop_widest(&ws).unwrap();
    assert_eq!(id, ItemId(5));
}

#[test]
fn pop_largest_takes_max_area() {
    let ws = ws();
    let mut pool = Pool::new(&ws);
    let id = pool.pop_largest(&ws).unwrap();
    let max_area = ws.items().map(|item| item.area()).max().unwrap();
    assert_eq!(ws.item(id).unwrap().area(), max_area);
}

#[test]
fn pop_narrow_third_draws_from_narrowest_ranks() {
    let ws = ws();
    let mut rng = Rng64::new(11);
    let mut pool = Pool::new(&ws);
    // Narrow third of 6 items by width ranking: ids 0 and 1.
    let id = pool.pop_narrow_third(&ws, &mut rng).unwrap();
    assert!(id == ItemId(0) || id == ItemId(1));
}

#[test]
fn pop_narrow_third_falls_back_to_narrowest_remaining() {
    let ws = ws();
    let mut rng = Rng64::new(11);
    let mut pool = Pool::new(&ws);
    pool.pop_narrow_third(&ws, &mut rng).unwrap();
    pool.pop_narrow_third(&ws, &mut rng).unwrap();
    // Narrow-third pool exhausted; fallback picks the narrowest remaining.
    let id = pool.pop_narrow_third(&ws, &mut rng).unwrap();
    assert_eq!(id, ItemId(2));
}

#[test]
fn pop_large_third_draws_from_largest_ranks() {
    let ws = ws();
    let mut rng = Rng64::new(5);
    let mut pool = Pool::new(&ws);
    let large: Vec<ItemId> = {
        let third = ws.count().div_ceil(3);
        ws.order_by_area()[ws.count() - third..].to_vec()
    };
    let id = pool.pop_large_third(&mut rng).unwrap();
    assert!(large.contains(&id));
}

#[test]
fn pop_random_n_clamps_to_remaining() {
    let ws = ws();
    let mut rng = Rng64::new(5);
    let mut pool = Pool::new(&ws);
    let drawn = pool.pop_random_n(10, &mut rng);
    assert_eq!(drawn.len(), 6);
    assert!(pool.is_empty());
    assert!(pool.pop_random(&mut rng).is_none());
}

#[test]
fn draws_never_repeat() {
    let ws = ws();
    let mut rng = Rng64::new(23);
    let mut pool = Pool::new(&ws);
    let mut seen = std::collections::BTreeSet::new();
    while let Some(id) = pool.pop_random(&mut rng) {
        assert!(seen.insert(id));
    }
    assert_eq!(seen.len(), 6);
}
