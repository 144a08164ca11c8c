use crate::Llrb;

use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op {
    ReplaceOrInsert(u64),
    InsertNoReplace(u64),
    Delete(u64),
    DeleteMin,
    DeleteMax,
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    // small key space, so that replaces and repeating keys are common.
    let key = 0u64..64;
    let op = prop_oneof![
        30 => key.clone().prop_map(Op::ReplaceOrInsert),
        20 => key.clone().prop_map(Op::InsertNoReplace),
        30 => key.prop_map(Op::Delete),
        10 => Just(Op::DeleteMin),
        10 => Just(Op::DeleteMax),
    ];
    prop::collection::vec(op, 0..=500)
}

fn model_keys(model: &BTreeMap<u64, usize>) -> Vec<u64> {
    model
        .iter()
        .flat_map(|(key, n)| std::iter::repeat(*key).take(*n))
        .collect()
}

fn model_remove(model: &mut BTreeMap<u64, usize>, key: u64) -> bool {
    match model.get_mut(&key) {
        Some(n) if *n > 1 => {
            *n -= 1;
            true
        }
        Some(_) => {
            model.remove(&key);
            true
        }
        None => false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_ops_match_model(ops in ops_strategy()) {
        let mut llrb = Llrb::new("prop-llrb");
        let mut model: BTreeMap<u64, usize> = BTreeMap::new();

        for op in ops {
            match op {
                Op::ReplaceOrInsert(key) => {
                    let replaced = llrb.replace_or_insert(key);
                    prop_assert_eq!(replaced, model.contains_key(&key));
                    model.entry(key).or_insert(1);
                }
                Op::InsertNoReplace(key) => {
                    llrb.insert_no_replace(key);
                    *model.entry(key).or_insert(0) += 1;
                }
                Op::Delete(key) => {
                    prop_assert_eq!(llrb.delete(key), model_remove(&mut model, key));
                }
                Op::DeleteMin => {
                    let key = model.keys().next().cloned();
                    if let Some(key) = key {
                        model_remove(&mut model, key);
                    }
                    prop_assert_eq!(llrb.delete_min(), key);
                }
                Op::DeleteMax => {
                    let key = model.keys().next_back().cloned();
                    if let Some(key) = key {
                        model_remove(&mut model, key);
                    }
                    prop_assert_eq!(llrb.delete_max(), key);
                }
            }
            prop_assert!(llrb.validate().is_ok());
        }

        let keys = model_keys(&model);
        prop_assert_eq!(llrb.len(), keys.len());
        prop_assert_eq!(llrb.iter().collect::<Vec<u64>>(), keys.clone());
        prop_assert_eq!(llrb.min(), keys.first().cloned());
        prop_assert_eq!(llrb.max(), keys.last().cloned());

        let mut visited = vec![];
        llrb.ascend_greater_or_equal(0, |key| {
            visited.push(key);
            true
        });
        prop_assert_eq!(visited, keys);
    }

    #[test]
    fn prop_bounded_scans(
        keys in prop::collection::vec(0u64..256, 0..=300),
        low in 0u64..256,
        high in 0u64..256,
        limit in 1usize..20,
    ) {
        let mut llrb = Llrb::new("prop-llrb");
        llrb.insert_no_replace_bulk(keys.iter().cloned());
        let mut sorted = keys.clone();
        sorted.sort();

        let expect: Vec<u64> = sorted.iter().cloned().filter(|k| *k >= low && *k < high).collect();
        let mut visited = vec![];
        llrb.ascend_range(low, high, |key| {
            visited.push(key);
            true
        });
        prop_assert_eq!(&visited, &expect);
        prop_assert_eq!(llrb.range(low..high).collect::<Vec<u64>>(), expect);

        // early stop after `limit` keys.
        let expect: Vec<u64> = sorted.iter().cloned().filter(|k| *k < high).take(limit).collect();
        let mut visited = vec![];
        llrb.ascend_less_than(high, |key| {
            visited.push(key);
            visited.len() < limit
        });
        prop_assert_eq!(visited, expect);

        let expect: Vec<u64> = sorted.iter().rev().cloned().filter(|k| *k <= low).take(limit).collect();
        let mut visited = vec![];
        llrb.descend_less_or_equal(low, |key| {
            visited.push(key);
            visited.len() < limit
        });
        prop_assert_eq!(&visited, &expect);
        prop_assert_eq!(llrb.reverse(..=low).take(limit).collect::<Vec<u64>>(), expect);
    }

    #[test]
    fn prop_height_stats(keys in prop::collection::btree_set(any::<u64>(), 1..=500)) {
        let llrb = Llrb::load_from("prop-llrb", keys.iter().cloned());
        let (mean, stddev) = llrb.height_stats();
        let stats = llrb.validate().unwrap();
        let depths = stats.depths().unwrap();

        prop_assert!(mean <= depths.max() as f64);
        prop_assert!(stddev >= 0.0);
        for key in keys.iter() {
            let (k, depth) = llrb.get_height(*key).unwrap();
            prop_assert_eq!(k, *key);
            prop_assert!(depth <= depths.max());
        }
    }
}
