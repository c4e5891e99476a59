use std::collections::BTreeMap;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use ordered_tree_map::{IntegrityError, OrderedTreeMap, Rank};

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

fn key_strategy() -> impl Strategy<Value = i64> {
    // Narrower than TEST_SIZE so inserts collide and removes hit.
    -1_000i64..1_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

fn sample() -> OrderedTreeMap<i64, &'static str> {
    OrderedTreeMap::from([(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d"), (7, "g"), (9, "i")])
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum MapOp {
    Insert(i64, i64),
    Remove(i64),
    Get(i64),
    ContainsKey(i64),
    Floor(i64),
    Ceiling(i64),
    Rank(i64),
    Select(usize),
    DeleteMin,
    DeleteMax,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| MapOp::Insert(k, v)),
        3 => key_strategy().prop_map(MapOp::Remove),
        2 => key_strategy().prop_map(MapOp::Get),
        1 => key_strategy().prop_map(MapOp::ContainsKey),
        1 => key_strategy().prop_map(MapOp::Floor),
        1 => key_strategy().prop_map(MapOp::Ceiling),
        1 => key_strategy().prop_map(MapOp::Rank),
        1 => (0usize..1_200).prop_map(MapOp::Select),
        1 => Just(MapOp::DeleteMin),
        1 => Just(MapOp::DeleteMax),
    ]
}

// ─── Randomized comparison against BTreeMap ──────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random operation sequence on both maps and asserts identical
    /// results at every step.
    #[test]
    fn map_ops_match_btreemap(ops in proptest::collection::vec(map_op_strategy(), TEST_SIZE)) {
        let mut tree: OrderedTreeMap<i64, i64> = OrderedTreeMap::new();
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();

        for (step, op) in ops.iter().enumerate() {
            match *op {
                MapOp::Insert(k, v) => {
                    prop_assert_eq!(tree.insert(k, v), model.insert(k, v), "insert({}, {})", k, v);
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(tree.remove(&k), model.remove(&k), "remove({})", k);
                }
                MapOp::Get(k) => {
                    prop_assert_eq!(tree.get(&k), model.get(&k), "get({})", k);
                }
                MapOp::ContainsKey(k) => {
                    prop_assert_eq!(tree.contains_key(&k), model.contains_key(&k), "contains_key({})", k);
                }
                MapOp::Floor(k) => {
                    prop_assert_eq!(tree.floor(&k), model.range(..=k).next_back().map(|(k, _)| k), "floor({})", k);
                }
                MapOp::Ceiling(k) => {
                    prop_assert_eq!(tree.ceiling(&k), model.range(k..).next().map(|(k, _)| k), "ceiling({})", k);
                }
                MapOp::Rank(k) => {
                    prop_assert_eq!(tree.rank(&k), model.range(..k).count(), "rank({})", k);
                }
                MapOp::Select(i) => {
                    prop_assert_eq!(tree.select(i), model.keys().nth(i), "select({})", i);
                }
                MapOp::DeleteMin => {
                    prop_assert_eq!(tree.delete_min(), model.pop_first(), "delete_min");
                }
                MapOp::DeleteMax => {
                    prop_assert_eq!(tree.delete_max(), model.pop_last(), "delete_max");
                }
            }

            prop_assert_eq!(tree.len(), model.len());
            prop_assert_eq!(tree.min(), model.keys().next());
            prop_assert_eq!(tree.max(), model.keys().next_back());

            if step % 250 == 0 {
                prop_assert_eq!(tree.check(), Ok(()), "check after step {}", step);
            }
        }

        prop_assert_eq!(tree.check(), Ok(()));
    }

    /// Inserting distinct keys and listing them yields them sorted.
    #[test]
    fn keys_are_sorted_and_complete(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let tree: OrderedTreeMap<i64, i64> = entries.iter().copied().collect();
        let model: BTreeMap<i64, i64> = entries.iter().copied().collect();

        let keys = tree.keys();
        prop_assert_eq!(keys.len(), model.len());
        prop_assert!(keys.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(keys, model.keys().copied().collect::<Vec<_>>());
        prop_assert!(tree.iter().eq(model.iter()));
        prop_assert_eq!(tree.iter().len(), model.len());
    }

    /// Range counts and listings against `BTreeMap::range`.
    #[test]
    fn ranges_match_btreemap(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE),
        bounds in proptest::collection::vec((key_strategy(), key_strategy()), 1..50),
    ) {
        let tree: OrderedTreeMap<i64, i64> = entries.iter().copied().collect();
        let model: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for &(a, b) in &bounds {
            let (low, high) = (a.min(b), a.max(b));
            let expected: Vec<i64> = model.range(low..=high).map(|(k, _)| *k).collect();
            prop_assert_eq!(tree.range_len(&low, &high), expected.len(), "range_len({}, {})", low, high);
            prop_assert_eq!(tree.range_keys(&low, &high), expected, "range_keys({}, {})", low, high);
        }
    }

    /// rank(select(i)) == i and select(rank(k)) == k.
    #[test]
    fn rank_and_select_are_inverse(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let tree: OrderedTreeMap<i64, i64> = entries.iter().copied().collect();

        for i in 0..tree.len() {
            let key = tree.select(i).unwrap();
            prop_assert_eq!(tree.rank(key), i);
            prop_assert_eq!(tree.rank_of(key), Some(i));
        }
        for key in tree.keys() {
            prop_assert_eq!(tree.select(tree.rank(&key)), Some(&key));
        }
        prop_assert_eq!(tree.select(tree.len()), None);
        prop_assert!(tree.is_rank_consistent());
    }

    /// Removing a present key shrinks the map by one and keeps it well formed.
    #[test]
    fn remove_present_keys(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..100),
    ) {
        let mut tree: OrderedTreeMap<i64, i64> = entries.iter().copied().collect();
        let mut model: BTreeMap<i64, i64> = entries.iter().copied().collect();

        for pick in picks {
            if model.is_empty() {
                break;
            }
            let key = *model.keys().nth(pick.index(model.len())).unwrap();
            let before = tree.len();

            prop_assert_eq!(tree.remove(&key), model.remove(&key));
            prop_assert!(!tree.contains_key(&key));
            prop_assert_eq!(tree.len(), before - 1);
            prop_assert!(tree.is_bst());
            prop_assert!(tree.is_size_consistent());
            prop_assert!(tree.is_rank_consistent());
        }
    }

    /// Overwriting leaves the size and the shape alone.
    #[test]
    fn overwrite_keeps_shape(
        entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE),
        value in value_strategy(),
    ) {
        let mut tree: OrderedTreeMap<i64, i64> = entries.iter().copied().collect();
        let (len, height) = (tree.len(), tree.height());

        for (k, _) in &entries {
            tree.insert(*k, value);
        }

        prop_assert_eq!(tree.len(), len);
        prop_assert_eq!(tree.height(), height);
        prop_assert!(tree.iter().all(|(_, v)| *v == value));
    }

    #[test]
    fn clone_produces_equal_map(entries in proptest::collection::vec((key_strategy(), value_strategy()), 0..TEST_SIZE)) {
        let tree: OrderedTreeMap<i64, i64> = entries.iter().copied().collect();
        let copy = tree.clone();

        prop_assert_eq!(&copy, &tree);
        prop_assert_eq!(copy.height(), tree.height());
    }

    #[test]
    fn index_by_rank_matches_sorted_values(entries in proptest::collection::vec((key_strategy(), value_strategy()), 1..TEST_SIZE)) {
        let mut tree: OrderedTreeMap<i64, i64> = entries.iter().copied().collect();
        let sorted: Vec<(i64, i64)> = entries.iter().copied().collect::<BTreeMap<_, _>>().into_iter().collect();

        for (rank, (k, v)) in sorted.iter().enumerate() {
            prop_assert_eq!(tree[Rank(rank)], *v);
            prop_assert_eq!(tree.get_by_rank(rank), Some((k, v)));
        }

        tree[Rank(0)] = 42;
        prop_assert_eq!(tree.get(&sorted[0].0), Some(&42));
    }
}

// ─── Concrete scenarios ──────────────────────────────────────────────────────

#[test]
fn seven_key_scenario() {
    let mut table = sample();

    assert_eq!(table.len(), 7);
    assert_eq!(table.min(), Some(&1));
    assert_eq!(table.max(), Some(&9));
    assert_eq!(table.rank(&7), 4);
    assert_eq!(table.select(4), Some(&7));
    assert_eq!(table.range_keys(&3, &8), vec![3, 4, 5, 7, 8]);
    assert_eq!(table.range_len(&3, &8), 5);
    assert_eq!(table.floor(&6), Some(&5));
    assert_eq!(table.ceiling(&6), Some(&7));
    assert_eq!(table.height(), Some(2));

    assert_eq!(table.remove(&5), Some("e"));
    assert!(!table.contains_key(&5));
    assert_eq!(table.len(), 6);
    assert!(table.is_bst());
    assert!(table.is_size_consistent());
    assert!(table.is_rank_consistent());
    assert_eq!(table.keys(), vec![1, 3, 4, 7, 8, 9]);
}

#[test]
fn empty_table_boundaries() {
    let mut table: OrderedTreeMap<i64, i64> = OrderedTreeMap::new();

    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert_eq!(table.get(&1), None);
    assert!(!table.contains_key(&1));
    assert_eq!(table.delete_min(), None);
    assert_eq!(table.delete_max(), None);
    assert_eq!(table.rank(&1), 0);
    assert_eq!(table.min(), None);
    assert_eq!(table.max(), None);
    assert_eq!(table.floor(&1), None);
    assert_eq!(table.ceiling(&1), None);
    assert_eq!(table.select(0), None);
    assert_eq!(table.range_len(&0, &10), 0);
    assert_eq!(table.range_keys(&0, &10), Vec::<i64>::new());
    assert_eq!(table.keys(), Vec::<i64>::new());
    assert_eq!(table.height(), None);
    assert_eq!(table.check(), Ok(()));
    assert_eq!(table.remove(&1), None);
}

#[test]
fn delete_min_and_max_drain_in_order() {
    let mut table = sample();
    let mut drained = Vec::new();

    while let Some((min, _)) = table.delete_min() {
        drained.push(min);
        if let Some((max, _)) = table.delete_max() {
            drained.push(max);
        }
        assert_eq!(table.check(), Ok(()));
    }

    assert_eq!(drained, vec![1, 9, 3, 8, 4, 7, 5]);
    assert!(table.is_empty());
}

#[test]
fn clear_then_reuse() {
    let mut table = sample();
    table.clear();

    assert!(table.is_empty());
    assert_eq!(table.keys(), Vec::<i64>::new());

    table.insert(2, "b");
    assert_eq!(table.keys(), vec![2]);
    assert_eq!(table.check(), Ok(()));
}

#[test]
fn ranges_over_string_keys() {
    let table: OrderedTreeMap<String, usize> =
        ["delta", "alpha", "echo", "charlie", "bravo"].iter().map(|w| (w.to_string(), w.len())).collect();

    // Keys that are not integers cannot be enumerated by incrementing.
    assert_eq!(table.range_keys("b", "d"), vec!["bravo", "charlie"]);
    assert_eq!(table.range_len("b", "d"), 2);
    assert_eq!(table.range_keys("alpha", "echo").len(), 5);
    assert_eq!(table.floor("c"), Some(&"bravo".to_string()));
    assert_eq!(table.ceiling("c").map(String::as_str), Some("charlie"));
    assert_eq!(table.rank("c"), 2);
}

#[test]
fn hibbard_deletion_promotes_successor() {
    let mut table = OrderedTreeMap::from([(50, ()), (30, ()), (70, ()), (60, ()), (80, ()), (65, ())]);

    table.remove(&50);
    // 60 is the minimum of the right subtree and now sits at the root.
    assert_eq!(table.select(table.rank(&60)), Some(&60));
    assert_eq!(table.keys(), vec![30, 60, 65, 70, 80]);
    assert_eq!(table.height(), Some(2));
    assert_eq!(table.check(), Ok(()));
}

#[test]
fn sorted_inserts_build_a_path() {
    let table: OrderedTreeMap<i64, ()> = (0..1_000).map(|k| (k, ())).collect();

    assert_eq!(table.height(), Some(999));
    assert_eq!(table.rank(&500), 500);
    assert_eq!(table.select(999), Some(&999));
    assert_eq!(table.iter().count(), 1_000);
    assert_eq!(table.check(), Ok(()));
}

#[test]
fn index_by_key() {
    let table = sample();
    assert_eq!(table[&8], "h");
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_by_missing_key_panics() {
    let table = sample();
    let _value = table[&6];
}

#[test]
#[should_panic(expected = "rank out of bounds")]
fn index_by_missing_rank_panics() {
    let table = sample();
    let _value = table[Rank(7)];
}

#[test]
fn debug_lists_entries_in_order() {
    let table = OrderedTreeMap::from([(2, 'b'), (1, 'a')]);
    assert_eq!(format!("{table:?}"), "{1: 'a', 2: 'b'}");
}

#[test]
fn integrity_errors_render_as_diagnostics() {
    assert_eq!(IntegrityError::NotSymmetricOrder.to_string(), "Not in symmetric order");
    assert_eq!(IntegrityError::SizeInconsistent.to_string(), "Subtree counts not consistent");
    assert_eq!(IntegrityError::RankInconsistent.to_string(), "Ranks not consistent");
}
