use futures::future::join_all;
use std::fmt::Display;
use tokio::task::JoinHandle;
use tracing::{error, warn};

/// Awaits every task, splitting finished values from task errors.
/// Panicked or aborted tasks are logged and dropped.
pub async fn run_all<T, E>(tasks: Vec<JoinHandle<Result<T, E>>>) -> (Vec<T>, Vec<E>)
where
    E: Display,
{
    let mut completed = Vec::new();
    let mut failed = Vec::new();

    for result in join_all(tasks).await {
        match result {
            Ok(Ok(value)) => completed.push(value),
            Ok(Err(e)) => {
                warn!("Task execution error: {e}");
                failed.push(e);
            }
            Err(join_err) => error!("Task join error: {:?}", join_err),
        }
    }

    (completed, failed)
}
