//! The in-memory status map rendered by the dashboard.
use derive_more::Display;
use serde::Serialize;
use service_health_primitives::endpoint::EndpointId;

use super::checks::HealthCheckResult;

/// Status tag of a task item.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    #[display("Not started")]
    #[serde(rename = "Not started")]
    NotStarted,
    #[display("Completed")]
    Completed,
    #[display("Error")]
    Error,
}

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub endpoint_id: EndpointId,
    pub status: TaskStatus,
    pub latest: Option<HealthCheckResult>,
}

impl TaskItem {
    fn new(endpoint_id: EndpointId) -> Self {
        Self {
            endpoint_id,
            status: TaskStatus::NotStarted,
            latest: None,
        }
    }
}

/// One task item per endpoint, in the [`EndpointId::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBoard {
    items: [TaskItem; 3],
}

impl Default for StatusBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBoard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: EndpointId::ALL.map(TaskItem::new),
        }
    }

    /// Records the latest result of an endpoint.
    pub fn apply(&mut self, result: HealthCheckResult) {
        let item = self.item_mut(result.endpoint_id);

        item.status = if result.ok { TaskStatus::Completed } else { TaskStatus::Error };
        item.latest = Some(result);
    }

    #[must_use]
    pub fn item(&self, endpoint_id: EndpointId) -> &TaskItem {
        &self.items[Self::index(endpoint_id)]
    }

    #[must_use]
    pub fn items(&self) -> &[TaskItem] {
        &self.items
    }

    #[must_use]
    pub fn all_completed(&self) -> bool {
        self.items.iter().all(|item| item.status == TaskStatus::Completed)
    }

    fn item_mut(&mut self, endpoint_id: EndpointId) -> &mut TaskItem {
        &mut self.items[Self::index(endpoint_id)]
    }

    fn index(endpoint_id: EndpointId) -> usize {
        match endpoint_id {
            EndpointId::Health => 0,
            EndpointId::Live => 1,
            EndpointId::Ready => 2,
        }
    }
}
