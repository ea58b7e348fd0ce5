use crate::auth::Caller;
use crate::db::TaskRepository;
use crate::error::AppError;
use crate::models::{Task, TaskInput};

/// Task CRUD with ownership scoping.
///
/// Every operation is scoped by the request's `Caller`: authenticated users
/// only ever see and touch their own tasks. Anonymous callers run unscoped,
/// which means anonymous listing returns every task in the system. That
/// visibility rule is inherited behavior the frontend relies on; it is
/// asserted by tests rather than changed here.
#[derive(Clone)]
pub struct TaskService {
    tasks: TaskRepository,
}

impl TaskService {
    pub fn new(tasks: TaskRepository) -> Self {
        Self { tasks }
    }

    pub async fn list(&self, caller: Caller) -> Result<Vec<Task>, AppError> {
        Ok(self.tasks.list(caller.user_id()).await?)
    }

    /// `Ok(None)` means "no matching task", distinct from a database error.
    pub async fn get(&self, id: i64, caller: Caller) -> Result<Option<Task>, AppError> {
        Ok(self.tasks.find(id, caller.user_id()).await?)
    }

    pub async fn create(&self, input: &TaskInput, caller: Caller) -> Result<Task, AppError> {
        Ok(self
            .tasks
            .insert(&input.text, input.completed, caller.user_id())
            .await?)
    }

    /// Updates the task, or creates a fresh one when no row matches the
    /// caller's scope. The create fallback is a load-bearing contract (the
    /// frontend PUTs tasks it has not POSTed first), not an accident.
    pub async fn update(
        &self,
        id: i64,
        input: &TaskInput,
        caller: Caller,
    ) -> Result<Task, AppError> {
        match self.tasks.find(id, caller.user_id()).await? {
            Some(task) => Ok(self
                .tasks
                .update(task.id, &input.text, input.completed)
                .await?),
            None => self.create(input, caller).await,
        }
    }

    pub async fn delete(&self, id: i64, caller: Caller) -> Result<(), AppError> {
        let rows = self.tasks.delete(id, caller.user_id()).await?;
        if rows == 0 {
            return Err(AppError::NotFound("Task not found or not owned by user".into()));
        }
        Ok(())
    }
}
