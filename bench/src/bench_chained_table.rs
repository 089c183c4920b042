use std::collections::HashMap;
use std::time::Instant;

use chainbook::ChainedTable;
use rand::{distributions::Alphanumeric, Rng};

const NUM_BUCKETS: usize = 100;
const NUM_PAIRS: usize = 100_000;

macro_rules! bench {
    ($name: expr, $body: expr) => {
        let now = Instant::now();
        $body;
        let elapsed = now.elapsed();
        println!("{} elapsed: {:.2?}", $name, elapsed);
    };
}

fn make_random_string() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(char::from)
        .collect()
}

fn make_random_string_pairs(n: usize) -> Vec<(String, String)> {
    (0..n)
        .map(|_| (make_random_string(), make_random_string()))
        .collect()
}

fn bench_inserts(src: &[(String, String)]) {
    println!("bench inserts");

    let table_data = src.to_vec();
    bench!("ChainedTable", {
        let mut table = ChainedTable::with_num_buckets(NUM_BUCKETS).unwrap();
        for (name, number) in table_data {
            table.insert(name, number);
        }
    });

    let map_data = src.to_vec();
    bench!("std HashMap", {
        let mut map = HashMap::new();
        for (name, number) in map_data {
            map.insert(name, number);
        }
    });
}

fn bench_searches(src: &[(String, String)]) {
    println!("bench searches");

    let mut table = ChainedTable::with_num_buckets(NUM_BUCKETS).unwrap();
    let mut map = HashMap::new();
    for (name, number) in src {
        table.insert(name.clone(), number.clone());
        map.insert(name.clone(), number.clone());
    }

    bench!("ChainedTable", {
        for (name, _) in src {
            assert!(table.search(name).is_some());
        }
    });

    bench!("std HashMap", {
        for (name, _) in src {
            assert!(map.get(name).is_some());
        }
    });
}

fn main() {
    let input = make_random_string_pairs(NUM_PAIRS);
    bench_inserts(&input);
    bench_searches(&input);
}
