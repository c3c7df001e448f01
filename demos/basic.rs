//! Walks through every sequence operation and a 3-per-second rate limiter.
//!
//! Run with `RUST_LOG=seq_throttle=trace` to see the limiter's own events.

use seq_throttle::sequence::{
    dedup_stable, equal, filter_greater_than, max, merge, remove_at, reverse_in_place, sum,
};
use seq_throttle::{Counter, RateLimiter};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn demonstrate_sequences() {
    println!("=== Sequence Operations ===\n");

    let original = vec![1, 2, 3, 4, 5];
    let updated = remove_at(original.clone(), 2);
    println!("remove_at({:?}, 2) = {:?}", original, updated);
    println!("remove_at({:?}, -1) = {:?}", original, remove_at(original.clone(), -1));

    let merged = merge(&[1, 2, 3], &[4, 5, 6]);
    println!("merge([1, 2, 3], [4, 5, 6]) = {:?}", merged);

    let values = [10, 20, 30, 40, 50];
    println!(
        "filter_greater_than({:?}, 25) = {:?}",
        values,
        filter_greater_than(&values, &25)
    );

    let mut reversed = vec![1, 2, 3, 4, 5];
    reverse_in_place(&mut reversed);
    println!("reverse_in_place([1, 2, 3, 4, 5]) = {:?}", reversed);

    match max(&[45, 23, 67, 12, 89]) {
        Ok(value) => println!("max([45, 23, 67, 12, 89]) = {}", value),
        Err(e) => println!("max failed: {}", e),
    }
    if let Err(e) = max::<i32>(&[]) {
        println!("max([]) failed: {}", e);
    }

    println!("equal([1, 2, 3], [1, 2, 3]) = {}", equal(&[1, 2, 3], &[1, 2, 3]));
    println!("equal([1, 2, 3], [1, 2]) = {}", equal(&[1, 2, 3], &[1, 2]));

    println!(
        "dedup_stable([1, 2, 2, 3, 4, 4, 5]) = {:?}",
        dedup_stable(&[1, 2, 2, 3, 4, 4, 5])
    );

    println!("sum([5, 6, 78, 7, 0, 6]) = {}", sum(&[5, 6, 78, 7, 0, 6]));
}

fn demonstrate_counter() {
    println!("\n=== Counter ===\n");

    let mut counter = Counter::new();
    println!("{}", counter.next());
    println!("{}", counter.next());
}

fn demonstrate_rate_limiter() -> Result<(), seq_throttle::ConfigError> {
    println!("\n=== Rate Limiter ===");
    println!("Allow 3 calls per second\n");

    let mut limiter = RateLimiter::new(3, Duration::from_secs(1))?;

    for i in 1..=5 {
        println!("call {}: admitted = {}", i, limiter.try_acquire());
    }

    println!("\nsleeping past the window...\n");
    thread::sleep(Duration::from_millis(1100));

    println!("call 6: admitted = {}", limiter.try_acquire());
    println!("calls in window: {}", limiter.calls_in_window());

    let snapshot = limiter.metrics().snapshot();
    println!(
        "\nadmitted: {}, rejected: {}, rejection rate: {:.1}%",
        snapshot.admitted,
        snapshot.rejected,
        snapshot.rejection_rate() * 100.0
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    demonstrate_sequences();
    demonstrate_counter();
    demonstrate_rate_limiter()?;

    println!("\n=== Example Complete ===");
    Ok(())
}
