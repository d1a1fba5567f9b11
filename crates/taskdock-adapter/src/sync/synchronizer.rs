/*
[INPUT]:  UI-level operations (refresh, add, update, delete, clear)
[OUTPUT]: Local task list kept consistent with the remote collection
[POS]:    Sync layer - core state synchronization logic
[UPDATE]: When operation semantics or recovery policy change
[UPDATE]: 2026-08-07 Sequence-tagged refresh and bounded clear fan-out
*/

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::stream::{self, StreamExt};
use tracing::{debug, warn};

use crate::http::{Result, TodoClient, TodoError};
use crate::types::{Task, TaskPayload};

/// Max concurrent deletes during [`TaskSynchronizer::clear_all`]
const CLEAR_MAX_IN_FLIGHT: usize = 5;

const LOAD_ERROR_MESSAGE: &str = "Failed to load tasks. Please try again.";
const ADD_ERROR_MESSAGE: &str = "Failed to add the task. Please try again.";
const UPDATE_ERROR_MESSAGE: &str = "Failed to update the task. Please try again.";
const DELETE_ERROR_MESSAGE: &str = "Failed to delete the task. Please try again.";

/// Per-id result of a bulk clear.
///
/// Deletes are independent; a partial failure leaves the confirmed ids
/// removed on both sides and the failed ids present on both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearOutcome {
    pub deleted: Vec<i64>,
    pub failed: Vec<i64>,
}

impl ClearOutcome {
    /// True when every issued delete succeeded
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of deletes issued
    pub fn attempted(&self) -> usize {
        self.deleted.len() + self.failed.len()
    }
}

#[derive(Debug, Default)]
struct SyncState {
    tasks: Vec<Task>,
    loading: bool,
    last_error: Option<String>,
    /// Sequence number of the most recently issued operation. A full-list
    /// install is discarded when a later operation was issued while its
    /// request was in flight.
    latest_seq: u64,
}

/// Keeps an in-memory task list consistent with one owner's remote
/// collection.
///
/// State lives behind a mutex that is only held for non-await critical
/// sections; requests run without the lock, so operations may overlap and
/// each apply step is atomic relative to the others. Clones share state.
#[derive(Debug, Clone)]
pub struct TaskSynchronizer {
    client: TodoClient,
    state: Arc<Mutex<SyncState>>,
}

impl TaskSynchronizer {
    pub fn new(client: TodoClient) -> Self {
        Self {
            client,
            state: Arc::new(Mutex::new(SyncState::default())),
        }
    }

    /// Snapshot of the local task list, in server order
    pub fn tasks(&self) -> Vec<Task> {
        self.lock_state().tasks.clone()
    }

    /// True while an operation is pending
    pub fn is_loading(&self) -> bool {
        self.lock_state().loading
    }

    /// Latest user-visible error message, if any
    pub fn last_error(&self) -> Option<String> {
        self.lock_state().last_error.clone()
    }

    /// Dismiss the current error message
    pub fn clear_error(&self) {
        self.lock_state().last_error = None;
    }

    /// Fetch the authoritative collection and install it locally.
    ///
    /// A 404 means the owner has no collection yet: the list becomes empty
    /// and no error is recorded. On any other failure the previous local
    /// list is preserved (stale but internally consistent) and the error
    /// is surfaced. Returns the local list length after settling.
    pub async fn refresh(&self) -> Result<usize> {
        let seq = self.begin_operation();
        let result = self.client.list_tasks().await;

        let mut state = self.lock_state();
        state.loading = false;
        match result {
            Ok(tasks) => {
                if state.latest_seq != seq {
                    debug!(seq, latest = state.latest_seq, "discarding stale list response");
                    return Ok(state.tasks.len());
                }
                state.tasks = tasks;
                Ok(state.tasks.len())
            }
            Err(err) => {
                warn!(error = %err, "failed to load tasks");
                state.last_error = Some(LOAD_ERROR_MESSAGE.to_string());
                Err(err)
            }
        }
    }

    /// Create a task from `label` and append the server-returned item.
    ///
    /// The label is trimmed first; an empty result is silently ignored
    /// (`Ok(None)`, no request issued, list unchanged). There is no
    /// optimistic insert: the local list gains the item only once the
    /// server has assigned its id.
    pub async fn add(&self, label: &str) -> Result<Option<Task>> {
        let label = label.trim();
        if label.is_empty() {
            return Ok(None);
        }

        self.begin_operation();
        let payload = TaskPayload::new(label);
        let result = self.client.create_task(&payload).await;

        let mut state = self.lock_state();
        state.loading = false;
        match result {
            Ok(task) => {
                state.tasks.push(task.clone());
                Ok(Some(task))
            }
            Err(err) => {
                warn!(error = %err, label, "failed to add task");
                state.last_error = Some(ADD_ERROR_MESSAGE.to_string());
                Err(err)
            }
        }
    }

    /// Full-replace the task with `id` and install the server's version.
    ///
    /// On failure local state is unchanged; there is no rollback fetch,
    /// since nothing was mutated ahead of confirmation.
    pub async fn update(&self, id: i64, payload: TaskPayload) -> Result<Task> {
        self.begin_operation();
        let result = self.client.replace_task(id, &payload).await;

        let mut state = self.lock_state();
        state.loading = false;
        match result {
            Ok(task) => {
                if let Some(entry) = state.tasks.iter_mut().find(|entry| entry.id == id) {
                    *entry = task.clone();
                }
                Ok(task)
            }
            Err(err) => {
                warn!(error = %err, id, "failed to update task");
                state.last_error = Some(UPDATE_ERROR_MESSAGE.to_string());
                Err(err)
            }
        }
    }

    /// Flip `is_done` on the task with `id`, keeping its label.
    ///
    /// The id must refer to a task currently in the local list.
    pub async fn toggle_done(&self, id: i64) -> Result<Task> {
        let mut payload = self.payload_for(id)?;
        payload.is_done = !payload.is_done;
        self.update(id, payload).await
    }

    /// Relabel the task with `id`, keeping its done flag.
    ///
    /// The same trim rule as [`TaskSynchronizer::add`] applies: an empty
    /// trimmed label is silently ignored and no request is issued.
    pub async fn set_label(&self, id: i64, label: &str) -> Result<Option<Task>> {
        let label = label.trim();
        if label.is_empty() {
            return Ok(None);
        }

        let mut payload = self.payload_for(id)?;
        payload.label = label.to_string();
        self.update(id, payload).await.map(Some)
    }

    /// Delete the task with `id` and remove exactly that local entry.
    ///
    /// Deleting an id the server no longer knows fails with a 404 and
    /// leaves local state untouched.
    pub async fn remove(&self, id: i64) -> Result<()> {
        self.begin_operation();
        let result = self.client.delete_task(id).await;

        let mut state = self.lock_state();
        state.loading = false;
        match result {
            Ok(()) => {
                state.tasks.retain(|task| task.id != id);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, id, "failed to delete task");
                state.last_error = Some(DELETE_ERROR_MESSAGE.to_string());
                Err(err)
            }
        }
    }

    /// Delete every currently-known task, one request per id.
    ///
    /// The service has no bulk-delete endpoint, so deletes fan out with at
    /// most [`CLEAR_MAX_IN_FLIGHT`] in flight and join once all settle.
    /// Only ids whose delete confirmed are removed locally; failures stay
    /// in the list and are surfaced as a counted error message.
    pub async fn clear_all(&self) -> ClearOutcome {
        let ids: Vec<i64> = {
            let state = self.lock_state();
            state.tasks.iter().map(|task| task.id).collect()
        };
        if ids.is_empty() {
            return ClearOutcome::default();
        }

        self.begin_operation();
        let results: Vec<(i64, Result<()>)> = stream::iter(ids.into_iter().map(|id| {
            let client = self.client.clone();
            async move { (id, client.delete_task(id).await) }
        }))
        .buffer_unordered(CLEAR_MAX_IN_FLIGHT)
        .collect()
        .await;

        let mut outcome = ClearOutcome::default();
        for (id, result) in results {
            match result {
                Ok(()) => outcome.deleted.push(id),
                Err(err) => {
                    warn!(error = %err, id, "delete failed during clear");
                    outcome.failed.push(id);
                }
            }
        }

        let mut state = self.lock_state();
        state.loading = false;
        state.tasks.retain(|task| !outcome.deleted.contains(&task.id));
        if !outcome.is_complete() {
            state.last_error = Some(format!(
                "Failed to clear {} of {} tasks. Please try again.",
                outcome.failed.len(),
                outcome.attempted(),
            ));
        }
        outcome
    }

    /// Start an operation: take the next sequence number, mark the
    /// synchronizer pending, and drop the previous error message.
    fn begin_operation(&self) -> u64 {
        let mut state = self.lock_state();
        state.latest_seq += 1;
        state.loading = true;
        state.last_error = None;
        state.latest_seq
    }

    /// Current payload of the task with `id`, for read-modify-write ops
    fn payload_for(&self, id: i64) -> Result<TaskPayload> {
        let state = self.lock_state();
        state
            .tasks
            .iter()
            .find(|task| task.id == id)
            .map(TaskPayload::from)
            .ok_or(TodoError::UnknownTask(id))
    }

    fn lock_state(&self) -> MutexGuard<'_, SyncState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
