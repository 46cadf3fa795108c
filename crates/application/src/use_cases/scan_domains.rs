use lame_delegation_domain::{DnsQuery, DomainError, ScanResult};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, instrument};

use super::ResolveDomainUseCase;

/// Runs [`ResolveDomainUseCase`] over many hostnames on a bounded pool of
/// tasks.
pub struct ScanDomainsUseCase {
    resolver: Arc<ResolveDomainUseCase>,
    workers_per_cpu: usize,
    progress_interval: usize,
}

impl ScanDomainsUseCase {
    pub fn new(
        resolver: Arc<ResolveDomainUseCase>,
        workers_per_cpu: usize,
        progress_interval: usize,
    ) -> Self {
        Self {
            resolver,
            workers_per_cpu,
            progress_interval,
        }
    }

    /// Number of workers for a batch of `hosts` hostnames.
    pub fn worker_count(&self, hosts: usize) -> usize {
        let cpus = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        (cpus * self.workers_per_cpu).min(hosts).max(1)
    }

    /// Returns exactly one result per query, in submission order.
    #[instrument(skip(self, queries), fields(hosts = queries.len()))]
    pub async fn execute(&self, queries: Vec<DnsQuery>) -> Result<Vec<ScanResult>, DomainError> {
        let total = queries.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        let workers = self.worker_count(total);
        info!(hosts = total, workers, "Starting scan");

        let (task_tx, task_rx) = mpsc::channel::<(usize, DnsQuery)>(total);
        let (result_tx, mut result_rx) = mpsc::channel::<(usize, ScanResult)>(total);
        let task_rx = Arc::new(Mutex::new(task_rx));

        for (index, query) in queries.into_iter().enumerate() {
            // Capacity equals the batch size, so this never waits.
            if task_tx.send((index, query)).await.is_err() {
                break;
            }
        }
        drop(task_tx);

        for worker in 0..workers {
            let task_rx = Arc::clone(&task_rx);
            let result_tx = result_tx.clone();
            let resolver = Arc::clone(&self.resolver);

            tokio::spawn(async move {
                loop {
                    let next = task_rx.lock().await.recv().await;
                    let Some((index, query)) = next else {
                        break;
                    };
                    let result = resolver.execute(&query).await;
                    if result_tx.send((index, result)).await.is_err() {
                        break;
                    }
                }
                debug!(worker, "Scan worker finished");
            });
        }
        drop(result_tx);

        let mut slots: Vec<Option<ScanResult>> = vec![None; total];
        let mut received = 0usize;
        let interval = self.progress_interval.max(1);

        while received < total {
            let Some((index, result)) = result_rx.recv().await else {
                break;
            };
            slots[index] = Some(result);
            received += 1;
            if received % interval == 0 || received == total {
                info!(completed = received, total, "Scan progress");
            }
        }

        if received < total {
            return Err(DomainError::ScanIncomplete {
                expected: total,
                received,
            });
        }

        Ok(slots.into_iter().flatten().collect())
    }
}
