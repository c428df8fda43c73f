//! Concurrent load against the running server.

use std::collections::HashSet;
use std::time::{Duration, Instant};

mod common;

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let server = common::start_server().await;

    let concurrency = 20;
    let requests_per_task = 25;
    let total_requests = concurrency * requests_per_task;

    let client = common::client();
    let start = Instant::now();

    let mut tasks = Vec::with_capacity(concurrency);
    for i in 0..concurrency {
        let client = client.clone();
        let path = ["/", "/api/users", "/health"][i % 3];
        let url = server.url(path);
        tasks.push(tokio::spawn(async move {
            let mut bodies = HashSet::new();
            let mut ok = 0usize;
            for _ in 0..requests_per_task {
                let res = client.get(&url).send().await.unwrap();
                if res.status() == reqwest::StatusCode::OK {
                    ok += 1;
                }
                bodies.insert(res.bytes().await.unwrap());
            }
            (path, ok, bodies)
        }));
    }

    let mut succeeded = 0;
    for task in tasks {
        let (path, ok, bodies) = task.await.unwrap();
        succeeded += ok;
        assert_eq!(bodies.len(), 1, "{path} returned differing bodies");
    }

    let elapsed = start.elapsed();
    println!(
        "{} requests in {:?} ({:.0} req/s)",
        total_requests,
        elapsed,
        total_requests as f64 / elapsed.as_secs_f64()
    );

    assert_eq!(succeeded, total_requests);
    assert!(elapsed < Duration::from_secs(30), "load test too slow: {:?}", elapsed);

    server.stop().await;
}
