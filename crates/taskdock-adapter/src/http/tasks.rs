/*
[INPUT]:  Owner-scoped task operations and request payloads
[OUTPUT]: Typed task collection responses
[POS]:    HTTP layer - task collection endpoints (no auth required)
[UPDATE]: When adding new endpoints or changing response format
[UPDATE]: 2026-08-06 Scoped item endpoints under the owner path
*/

use crate::http::{Result, TodoClient};
use crate::types::{Task, TaskPayload};
use reqwest::Method;

impl TodoClient {
    /// Fetch the owner's full task collection in server order.
    ///
    /// GET /{owner}
    /// A 404 means the owner's collection does not exist yet and is
    /// reported as an empty list, not an error.
    pub async fn list_tasks(&self) -> Result<Vec<Task>> {
        let builder = self.collection_request(Method::GET)?;
        match self.send_json(builder).await {
            Err(err) if err.is_not_found() => Ok(Vec::new()),
            other => other,
        }
    }

    /// Create a task; the server assigns the id.
    ///
    /// POST /{owner}
    pub async fn create_task(&self, payload: &TaskPayload) -> Result<Task> {
        let builder = self.collection_request(Method::POST)?.json(payload);
        self.send_json(builder).await
    }

    /// Full-replace a task by id.
    ///
    /// PUT /{owner}/{id}
    pub async fn replace_task(&self, id: i64, payload: &TaskPayload) -> Result<Task> {
        let builder = self.item_request(Method::PUT, id)?.json(payload);
        self.send_json(builder).await
    }

    /// Delete a task by id.
    ///
    /// DELETE /{owner}/{id}
    /// Success is 200 or 204 with no meaningful body.
    pub async fn delete_task(&self, id: i64) -> Result<()> {
        let builder = self.item_request(Method::DELETE, id)?;
        self.send_no_content(builder).await
    }
}
