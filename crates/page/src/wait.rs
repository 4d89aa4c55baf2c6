//! Readiness polling for the external math renderer.

use std::time::Duration;

use texflow_core::TexflowError;

/// Options controlling the readiness poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitOptions {
    /// Delay between readiness checks.
    pub interval: Duration,
    /// Upper bound on the whole wait; `None` polls forever.
    pub timeout: Option<Duration>,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

/// Polls the readiness predicate until it reports true.
///
/// The predicate is checked immediately and then once per interval. The
/// returned future is cancel-safe: dropping it stops the poll. With a
/// bounded timeout the wait fails with
/// [`TexflowError::RendererUnavailable`] once the bound elapses; with
/// `timeout: None` the poll never gives up.
pub async fn wait_until<F>(mut ready: F, options: &WaitOptions) -> Result<(), TexflowError>
where
    F: FnMut() -> bool,
{
    let poll = async {
        loop {
            if ready() {
                return;
            }
            tokio::time::sleep(options.interval).await;
        }
    };

    match options.timeout {
        Some(limit) => tokio::time::timeout(limit, poll)
            .await
            .map_err(|_| TexflowError::RendererUnavailable(limit)),
        None => {
            poll.await;
            Ok(())
        }
    }
}
