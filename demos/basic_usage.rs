// demos/basic_usage.rs
//! Basic usage example of the set and queue modules

use gencoll::prelude::*;

fn main() -> Result<()> {
    println!("=== Set Usage ===\n");

    let mut admins = Set::from_elems(["alice", "bob"]);
    let online = Set::from_elems(["bob", "carol", "dave"]);
    admins.add("erin");

    println!("Admins: {}", admins);
    println!("Online: {}", online);
    println!("Online admins: {}", admins.intersection(&online));
    println!("Everyone: {}", admins.union(&online));
    println!("Offline admins: {}", admins.difference(&online));

    let snapshot = admins.copy();
    admins.delete(&"erin");
    println!(
        "Snapshot unchanged after delete: {}",
        snapshot.has(&"erin") && !admins.has(&"erin")
    );

    println!("\n=== Queue Usage ===\n");

    let mut jobs = CircularQueue::from_items(3, vec![1, 2, 3]);
    println!("Seeded: {} (full: {})", jobs, jobs.is_full());

    let first = jobs.get()?;
    println!("Processed job {}, remaining {}", first, jobs);

    jobs.put(4);
    println!("After put(4): {} capacity {}", jobs, jobs.capacity());

    jobs.put(5);
    println!("After put(5): {} capacity {}", jobs, jobs.capacity());

    while !jobs.is_empty() {
        let job = jobs.get()?;
        println!("Processing job {}", job);
    }

    match jobs.get() {
        Ok(job) => println!("Unexpected job {}", job),
        Err(e) => println!("Drained: {}", e),
    }

    println!("\n=== Bounded Queue ===\n");

    let mut bounded = CircularQueue::with_config(QueueConfig::new(2).with_max_capacity(4), 0..2)?;
    for i in 2..6 {
        match bounded.try_put(i) {
            Ok(()) => println!("Accepted {} -> {}", i, bounded),
            Err(e) => println!("Rejected {}: {}", i, e),
        }
    }

    Ok(())
}
