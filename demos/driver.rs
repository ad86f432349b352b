//! Walks a small tree through every operation and prints what happens.
//!
//! Set `RUST_LOG=weighted_tree=trace` to see the tree's own events.

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use weighted_tree::{Node, WeightedTree};

/// Compares the eighth byte of two payloads, which is where the sample payloads
/// differ.
fn same_index(probe: &str, payload: &String) -> bool {
    probe.as_bytes().get(7) == payload.as_bytes().get(7)
}

fn weights<'a>(nodes: impl Iterator<Item = &'a Node<String>>) -> String {
    let weights: Vec<_> = nodes.map(|n| n.weight().to_string()).collect();
    format!("[ {} ]", weights.join(", "))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let values: Vec<String> = (0..5).map(|i| format!("abc... {}", i)).collect();
    for value in &values {
        println!("{}", value);
    }

    let mut tree = WeightedTree::new();
    for (weight, value) in [10, 5, 15, 1, 20].iter().zip(&values) {
        if let Err(err) = tree.insert(*weight, value.clone()) {
            error!(weight, %err, "insert failed");
        }
    }
    tree.print();

    if let Err(err) = tree.remove(10) {
        error!(%err, "remove failed");
    }
    tree.print();

    match tree.find(values[3].as_str(), same_index) {
        Ok(node) => {
            println!("ret->weight {}", node.weight());
            println!("ret->data {}", node.payload());
        }
        Err(_) => println!("not found {}", values[3]),
    }

    let mut list = vec![None; tree.len()];
    match tree.collect_depth_first(&mut list) {
        Ok(()) => println!("{}", weights(list.iter().flatten().copied())),
        Err(err) => error!(%err, "depth-first collection failed"),
    }

    let mut list = vec![None; tree.len()];
    match tree.collect_breadth_first(&mut list) {
        Ok(()) => println!("{}", weights(list.iter().flatten().copied())),
        Err(err) => error!(%err, "breadth-first collection failed"),
    }

    info!(size = tree.len(), height = tree.height(), "all working");

    tree.clear();
    tree.destroy();
    println!("ending...");
}
