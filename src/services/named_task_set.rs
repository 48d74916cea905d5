use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use futures::{FutureExt, Stream};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Outcome of one named task: its output, or the message of the panic that
/// ended it.
pub type TaskOutcome<T> = Result<T, String>;

/// Runs keyed tasks on a bounded worker pool and hands them back in
/// completion order. A panicking task is reported under its own key and never
/// takes its siblings down.
pub struct NamedTaskSet<K, T> {
    tasks: JoinSet<(K, TaskOutcome<T>)>,
    permits: Arc<Semaphore>,
}

impl<K, T> NamedTaskSet<K, T>
where
    K: Send + 'static,
    T: Send + 'static,
{
    /// `width` is the number of tasks allowed to run at once; 0 is treated as 1.
    pub fn new(width: usize) -> Self {
        Self {
            tasks: JoinSet::new(),
            permits: Arc::new(Semaphore::new(width.max(1))),
        }
    }

    pub fn spawn<F>(&mut self, key: K, task: F)
    where
        F: Future<Output = T> + Send + 'static,
    {
        let permits = Arc::clone(&self.permits);
        self.tasks.spawn(async move {
            let _permit = match permits.acquire_owned().await {
                Ok(permit) => permit,
                Err(e) => return (key, Err(format!("worker pool closed: {}", e))),
            };
            let outcome = AssertUnwindSafe(task).catch_unwind().await.map_err(panic_message);
            (key, outcome)
        });
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Next finished task, or `None` once every task has been collected.
    pub async fn next_completed(&mut self) -> Option<(K, TaskOutcome<T>)> {
        while let Some(joined) = self.tasks.join_next().await {
            match joined {
                Ok(completed) => return Some(completed),
                // Only reachable when the runtime aborts the task; the key is lost with it.
                Err(e) => log::error!("❌ Worker task did not finish: {}", e),
            }
        }
        None
    }

    pub fn into_stream(self) -> impl Stream<Item = (K, TaskOutcome<T>)> + Send + 'static {
        futures::stream::unfold(self, |mut set| async move {
            set.next_completed().await.map(|completed| (completed, set))
        })
    }
}

pub(crate) fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
