use std::time::Duration;

/// Suspends the current task. Backed by `setTimeout` in the browser.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use tokio::time::{self, Instant};

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn sleep_settles_after_the_full_duration() {
        let started = Instant::now();

        assert!(
            time::timeout(Duration::from_millis(2999), sleep(Duration::from_millis(3000)))
                .await
                .is_err()
        );

        let started_again = Instant::now();
        sleep(Duration::from_millis(3000)).await;
        assert!(started_again.elapsed() >= Duration::from_millis(3000));
        assert!(started.elapsed() >= Duration::from_millis(5999));
    }
}
