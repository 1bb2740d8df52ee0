use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::metrics::Sample;

/// Dispatch `total` probes across a pool of exactly `workers` tasks.
///
/// Workers draw probe slots from a shared counter until all slots are
/// taken, so at most `workers` probes are in flight at any instant while
/// every slot is eventually issued; there is no mid-run cancellation.
/// Samples go to the collector channel in completion order, and the
/// channel closes once every worker has finished.
pub(crate) fn dispatch_probes<F, Fut>(
    total: u64,
    workers: usize,
    sample_tx: mpsc::Sender<Sample>,
    probe_fn: F,
) -> JoinHandle<()>
where
    F: Fn() -> Fut + Clone + Send + 'static,
    Fut: Future<Output = Sample> + Send + 'static,
{
    tokio::spawn(async move {
        let remaining = Arc::new(AtomicU64::new(total));
        let mut worker_handles = Vec::with_capacity(workers);

        for _ in 0..workers {
            let remaining = Arc::clone(&remaining);
            let sample_tx = sample_tx.clone();
            let probe_fn = probe_fn.clone();

            let handle = tokio::spawn(async move {
                while claim_slot(&remaining) {
                    let sample = probe_fn().await;
                    if sample_tx.send(sample).await.is_err() {
                        break;
                    }
                }
            });
            worker_handles.push(handle);
        }

        drop(sample_tx);

        for handle in worker_handles {
            if handle.await.is_err() {
                break;
            }
        }
    })
}

fn claim_slot(remaining: &AtomicU64) -> bool {
    remaining
        .fetch_update(Ordering::AcqRel, Ordering::Acquire, |slots| {
            slots.checked_sub(1)
        })
        .is_ok()
}
