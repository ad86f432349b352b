use weighted_tree::{Node, TreeError, Weight, WeightedTree};

use std::collections::BTreeMap;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts,
/// removes and clears we have the same entries in both.
fn do_ops(ops: &[Op], tree: &mut WeightedTree<u8>, map: &mut BTreeMap<Weight, u8>) {
    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                let weight = Weight::from(k);
                let result = tree.insert(weight, v);
                if map.contains_key(&weight) {
                    assert_eq!(result, Err(TreeError::DuplicateKey(weight)));
                } else {
                    map.insert(weight, v);
                    assert_eq!(result, Ok(map.len()));
                }
            }
            Op::Remove(k) => {
                let weight = Weight::from(k);
                let result = tree.remove(weight);
                assert_eq!(result.is_ok(), map.remove(&weight).is_some());
            }
            Op::Clear => {
                tree.clear();
                map.clear();
            }
        }
    }
}

/// Counts nodes by following links instead of asking the tree.
fn reachable(tree: &WeightedTree<u8>) -> usize {
    let mut count = 0;
    let mut stack: Vec<&Node<u8>> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left());
        stack.extend(node.right());
    }
    count
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
        let mut tree = WeightedTree::new();
        let mut map = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut map);

        tree.len() == map.len()
            && reachable(&tree) == map.len()
            && map.iter().all(|(weight, payload)| tree.get(*weight) == Some(payload))
            && tree.iter().map(|n| (n.weight(), *n.payload())).eq(map.into_iter())
    }
}

quickcheck::quickcheck! {
    fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
        let mut tree = WeightedTree::new();
        for x in &xs {
            let _ = tree.insert(Weight::from(*x), *x);
        }

        let weights: Vec<_> = tree.iter().map(Node::weight).collect();
        weights.windows(2).all(|pair| pair[0] < pair[1])
    }
}

quickcheck::quickcheck! {
    fn collect_matches_iterators(xs: Vec<i16>, spare: u8) -> bool {
        let mut tree = WeightedTree::new();
        for x in &xs {
            let _ = tree.insert(Weight::from(*x), ());
        }

        let mut pre = vec![None; tree.len() + usize::from(spare % 4)];
        let mut level = pre.clone();
        tree.collect_depth_first(&mut pre).unwrap();
        tree.collect_breadth_first(&mut level).unwrap();

        pre.iter().flatten().map(|n| n.weight()).eq(tree.depth_first().map(Node::weight))
            && level.iter().flatten().map(|n| n.weight()).eq(tree.breadth_first().map(Node::weight))
    }
}

quickcheck::quickcheck! {
    fn undersized_buffers_are_rejected(xs: Vec<i16>) -> bool {
        let mut tree = WeightedTree::new();
        for x in &xs {
            let _ = tree.insert(Weight::from(*x), ());
        }
        if tree.is_empty() {
            return true;
        }

        let mut buffer = vec![None; tree.len() - 1];
        let expected = Err(TreeError::CapacityTooSmall {
            capacity: tree.len() - 1,
            size: tree.len(),
        });

        tree.collect_depth_first(&mut buffer) == expected
            && tree.collect_breadth_first(&mut buffer) == expected
            && buffer.iter().all(Option::is_none)
    }
}

#[test]
fn scenario_from_five_weights() {
    let mut tree = WeightedTree::new();
    let payloads = ["abc... 0", "abc... 1", "abc... 2", "abc... 3", "abc... 4"];
    for (weight, payload) in [10, 5, 15, 1, 20].iter().zip(payloads.iter()) {
        tree.insert(*weight, payload.to_string()).unwrap();
    }

    assert_eq!(tree.iter().map(Node::weight).collect::<Vec<_>>(), [1, 5, 10, 15, 20]);

    tree.remove(10).unwrap();
    assert_eq!(tree.iter().map(Node::weight).collect::<Vec<_>>(), [1, 5, 15, 20]);
    assert_eq!(tree.len(), 4);

    // Same comparison the driver uses: the eighth byte of each payload.
    let found = tree
        .find(payloads[3], |probe: &str, payload: &String| {
            probe.as_bytes()[7] == payload.as_bytes()[7]
        })
        .unwrap();
    assert_eq!(found.weight(), 1);
    assert_eq!(found.payload(), "abc... 3");

    let mut buffer = vec![None; tree.len()];
    tree.collect_depth_first(&mut buffer).unwrap();
    let pre: Vec<_> = buffer.iter().flatten().map(|n| n.weight()).collect();
    assert_eq!(pre, [15, 5, 1, 20]);

    tree.collect_breadth_first(&mut buffer).unwrap();
    let level: Vec<_> = buffer.iter().flatten().map(|n| n.weight()).collect();
    assert_eq!(level, [15, 5, 20, 1]);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.insert(3, "fresh".to_string()), Ok(1));
}
