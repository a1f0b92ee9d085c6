use space_shooter::pool::Pool;

#[test]
fn insert_and_get() {
    let mut pool = Pool::new();
    let a = pool.insert("a");
    let b = pool.insert("b");
    assert_ne!(a, b);
    assert_eq!(pool.get(a), Some(&"a"));
    assert_eq!(pool.get(b), Some(&"b"));
    assert_eq!(pool.len(), 2);
}

#[test]
fn retire_empties_the_slot() {
    let mut pool = Pool::new();
    let a = pool.insert(1);
    assert_eq!(pool.retire(a), Some(1));
    assert_eq!(pool.get(a), None);
    assert!(pool.is_empty());
    // second retire is a no-op
    assert_eq!(pool.retire(a), None);
    assert_eq!(pool.len(), 0);
}

#[test]
fn retired_slot_not_reused_before_recycle() {
    let mut pool = Pool::new();
    let a = pool.insert(1);
    pool.retire(a);
    let b = pool.insert(2);
    assert_ne!(a, b);
    assert_eq!(pool.get(a), None);
}

#[test]
fn recycle_makes_slots_reusable() {
    let mut pool = Pool::new();
    let a = pool.insert(1);
    let b = pool.insert(2);
    pool.insert(3);
    pool.retire(b);
    pool.retire(a);
    pool.recycle();
    // lowest free slot first
    assert_eq!(pool.insert(4), a);
    assert_eq!(pool.insert(5), b);
    assert_eq!(pool.len(), 3);
}

#[test]
fn other_ids_stay_valid_across_retire() {
    let mut pool = Pool::new();
    let a = pool.insert('a');
    let b = pool.insert('b');
    let c = pool.insert('c');
    pool.retire(b);
    pool.recycle();
    assert_eq!(pool.get(a), Some(&'a'));
    assert_eq!(pool.get(c), Some(&'c'));
}

#[test]
fn retain_mut_retires_rejected_entries() {
    let mut pool: Pool<i32> = (1..=6).collect();
    pool.retain_mut(|v| {
        *v *= 10;
        *v % 20 == 0
    });
    let left: Vec<i32> = pool.values().copied().collect();
    assert_eq!(left, vec![20, 40, 60]);
    assert_eq!(pool.len(), 3);
}

#[test]
fn iteration_follows_slot_order() {
    let mut pool = Pool::new();
    let ids: Vec<_> = (0..4).map(|i| pool.insert(i)).collect();
    pool.retire(ids[1]);
    let seen: Vec<_> = pool.iter().map(|(id, v)| (id, *v)).collect();
    assert_eq!(seen, vec![(ids[0], 0), (ids[2], 2), (ids[3], 3)]);
    assert_eq!(pool.ids(), vec![ids[0], ids[2], ids[3]]);
}
