#![cfg(test)]

use super::*;

#[test]
fn test_defaults() {
    let table = HashTable::<i32>::new();
    assert_eq!(table.capacity(), DEFAULT_CAPACITY);
    assert_eq!(table.load_factor(), DEFAULT_LOAD_FACTOR);
    assert_eq!(table.size(), 0);
    assert!(table.is_empty());
    assert_eq!(table.retrieve_all(), Vec::<&i32>::new());
}

#[test]
fn test_constructor_validation() {
    let err = HashTable::<i32>::with_capacity_and_load_factor(16, 0.0).expect_err("zero");
    assert!(err.is_load_factor_out_of_range());

    let err = HashTable::<i32>::with_capacity_and_load_factor(16, 1.5).expect_err("too big");
    assert_eq!(
        err,
        LoadFactorOutOfRange { load_factor: 1.5 }.into(),
        "A load factor above 1 should be rejected."
    );

    let err = HashTable::<i32>::with_capacity_and_load_factor(16, f64::NAN).expect_err("NaN");
    assert!(
        err.is_load_factor_out_of_range(),
        "NaN should be rejected, not treated as in range."
    );

    let err = HashTable::<i32>::with_capacity(0).expect_err("no buckets");
    assert!(err.is_zero_capacity());

    let table = HashTable::<i32>::with_capacity_and_load_factor(30, 0.9).expect("valid config");
    assert_eq!(table.capacity(), 30);
    assert_eq!(table.load_factor(), 0.9);
}

#[test]
fn test_hash_code() {
    let table = HashTable::<i32>::new();
    // 'h' is 104 and '3' is 51.
    assert_eq!(table.hash_code("h3"), (104 + 51) % 16);
    assert_eq!(table.hash_code(""), 0);
    assert_eq!(
        table.hash_code("ab"),
        table.hash_code("ba"),
        "The additive hash is order-blind: permuted keys must collide."
    );
}

#[test]
fn test_insert_and_get() {
    let mut table = HashTable::new();
    assert_eq!(table.insert("hundred", 100), None);
    assert_eq!(table.insert("number", 31), None);

    assert_eq!(table.size(), 2);
    assert_eq!(table.get_value("hundred"), Some(&100));
    assert_eq!(table.get_value("number"), Some(&31));
    assert!(table.contains_key("number"));
    assert_eq!(
        table.get_value("missing"),
        None,
        "A missing key is None, not an error."
    );
    assert!(!table.contains_key("missing"));
}

#[test]
fn test_insert_updates_in_place() {
    let mut table = HashTable::new();
    table.insert("hundred", 100);
    assert_eq!(
        table.insert("hundred", 200),
        Some(100),
        "Updating a key should hand back the replaced value."
    );
    assert_eq!(table.size(), 1, "An update must not grow the size.");
    assert_eq!(table.get_value("hundred"), Some(&200));
}

// "ad", "bc" and "cb" all sum to 197, so with 16 buckets they share a chain.
const COLLIDING: [&str; 3] = ["ad", "bc", "cb"];

#[test]
fn test_colliding_keys_chain() {
    let mut table = HashTable::new();
    for (i, key) in COLLIDING.into_iter().enumerate() {
        table.insert(key, i);
    }

    assert_eq!(table.hash_code("ad"), table.hash_code("bc"));
    assert_eq!(table.hash_code("ad"), table.hash_code("cb"));
    assert_eq!(table.size(), 3);
    for (i, key) in COLLIDING.into_iter().enumerate() {
        assert_eq!(
            table.get_value(key),
            Some(&i),
            "Colliding keys must remain individually addressable."
        );
    }
    assert_eq!(
        table.retrieve_all(),
        [&0, &1, &2],
        "Within a bucket, values should keep chain (insertion) order."
    );
}

#[test]
fn test_delete_head_of_chain() {
    let mut table = HashTable::new();
    for (i, key) in COLLIDING.into_iter().enumerate() {
        table.insert(key, i);
    }

    assert_eq!(table.delete("ad"), Some(0));
    assert_eq!(table.size(), 2);
    assert_eq!(table.get_value("ad"), None);
    assert_eq!(
        table.retrieve_all(),
        [&1, &2],
        "Deleting the chain head should promote its successor."
    );
}

#[test]
fn test_delete_interior_of_chain() {
    let mut table = HashTable::new();
    for (i, key) in COLLIDING.into_iter().enumerate() {
        table.insert(key, i);
    }

    assert_eq!(table.delete("bc"), Some(1));
    assert_eq!(
        table.retrieve_all(),
        [&0, &2],
        "Deleting an interior entry should splice its neighbours together."
    );
    assert_eq!(table.get_value("cb"), Some(&2));

    assert_eq!(table.delete("cb"), Some(2));
    assert_eq!(table.delete("ad"), Some(0));
    assert_eq!(table.size(), 0);
    assert!(table.is_empty());
}

#[test]
fn test_delete_missing_keys() {
    let mut table = HashTable::new();
    table.insert("ad", 1);

    assert_eq!(table.delete("zz"), None, "An empty bucket yields None.");
    assert_eq!(
        table.delete("bc"),
        None,
        "A key missing from an occupied chain yields None."
    );
    assert_eq!(table.size(), 1, "Failed deletes must not change the size.");
}

#[test]
fn test_retrieve_all_is_bucket_then_chain_order() {
    let mut table = HashTable::new();
    // These keys hash to buckets 1 through 7 in order.
    for (i, key) in ["1", "99", "3", "1111", "5", "111111", "7"].into_iter().enumerate() {
        table.insert(key, i + 1);
    }
    assert_eq!(table.retrieve_all(), [&1, &2, &3, &4, &5, &6, &7]);
}

#[test]
fn test_growth_doubles_capacity_before_insert() {
    // 16 * 0.15 = 2.4, so the third insert has to double first.
    let mut table = HashTable::with_capacity_and_load_factor(16, 0.15).expect("valid config");
    table.insert("a", 1);
    table.insert("b", 2);
    assert_eq!(table.capacity(), 16, "Two entries fit without growing.");

    table.insert("c", 3);
    assert_eq!(table.capacity(), 32, "The third insert should double the capacity.");
    assert_eq!(table.size(), 3, "Rehashing must not distort the size.");
    for (key, value) in [("a", 1), ("b", 2), ("c", 3)] {
        assert_eq!(
            table.get_value(key),
            Some(&value),
            "Entries must be reachable under the new capacity."
        );
    }
}

#[test]
fn test_update_can_still_trigger_growth() {
    let mut table = HashTable::with_capacity_and_load_factor(16, 0.15).expect("valid config");
    table.insert("a", 1);
    table.insert("b", 2);

    // The growth check precedes the update check, so even re-inserting an existing key grows the
    // table once the threshold is crossed.
    assert_eq!(table.insert("a", 10), Some(1));
    assert_eq!(table.capacity(), 32);
    assert_eq!(table.size(), 2);
    assert_eq!(table.get_value("a"), Some(&10));
}

#[test]
fn test_growth_at_default_load_factor() {
    let mut table = HashTable::new();
    // 16 * 0.75 = 12: the 13th distinct key triggers the doubling.
    for i in 0..12 {
        table.insert(format!("key-{i}"), i);
        assert_eq!(table.capacity(), 16);
    }

    table.insert("key-12", 12);
    assert_eq!(table.capacity(), 32);
    assert_eq!(table.size(), 13);
    for i in 0..13 {
        assert_eq!(table.get_value(&format!("key-{i}")), Some(&i));
    }
}

#[test]
fn test_rehash_recomputes_buckets() {
    let mut table = HashTable::with_capacity_and_load_factor(16, 0.5).expect("valid config");
    // "A" (65) shares bucket 1 with "1" (49) at capacity 16, but not at 32 (1 vs 17).
    table.insert("A", 1);
    table.insert("1", 2);
    assert_eq!(table.hash_code("A"), table.hash_code("1"));
    assert_eq!(table.retrieve_all(), [&1, &2]);

    // 16 * 0.5 = 8, so the ninth insert doubles the capacity.
    for (i, key) in ["x", "y", "z", "w", "v", "u", "t"].into_iter().enumerate() {
        table.insert(key, i as i32 + 10);
    }
    assert_eq!(table.capacity(), 32);
    assert_ne!(
        table.hash_code("A"),
        table.hash_code("1"),
        "After doubling, these keys should land in different buckets."
    );
    assert_eq!(table.get_value("A"), Some(&1));
    assert_eq!(table.get_value("1"), Some(&2));
}
