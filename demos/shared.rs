//! Several worker threads competing for one shared admission window.

use seq_throttle::{RateLimiter, SharedRateLimiter};
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_thread_names(true)
        .init();

    let limiter = SharedRateLimiter::new(RateLimiter::new(5, Duration::from_millis(200))?);

    println!("=== Shared Rate Limiter ===");
    println!("4 workers, 5 calls per 200ms window\n");

    let workers: Vec<_> = (0..4)
        .map(|id| {
            let limiter = limiter.clone();
            thread::Builder::new()
                .name(format!("worker-{}", id))
                .spawn(move || {
                    let mut admitted = 0;
                    for _ in 0..10 {
                        if limiter.try_acquire() {
                            admitted += 1;
                        }
                        thread::sleep(Duration::from_millis(50));
                    }
                    info!(admitted, "worker finished");
                })
        })
        .collect::<Result<_, _>>()?;

    for worker in workers {
        worker
            .join()
            .map_err(|_| "worker thread panicked")?;
    }

    let snapshot = limiter.metrics().snapshot();
    println!(
        "\nadmitted: {}, rejected: {}, windows restarted: {}",
        snapshot.admitted, snapshot.rejected, snapshot.window_resets
    );
    Ok(())
}
