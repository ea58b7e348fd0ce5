use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use validator::Validate;

use crate::auth::Caller;
use crate::error::AppError;
use crate::models::TaskInput;
use crate::services::TaskService;

/// Lists tasks visible to the caller.
///
/// Authenticated requests see their own tasks; anonymous requests are
/// unscoped and see everything (see `TaskService` for the visibility rule).
#[get("")]
pub async fn get_tasks(
    service: web::Data<TaskService>,
    caller: Caller,
) -> Result<impl Responder, AppError> {
    let tasks = service.list(caller).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a task. Anonymous callers create unowned tasks.
#[post("")]
pub async fn create_task(
    service: web::Data<TaskService>,
    body: web::Json<TaskInput>,
    caller: Caller,
) -> Result<impl Responder, AppError> {
    body.validate()?;

    let task = service.create(&body, caller).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Fetches a single task by id, under the caller's ownership scope.
#[get("/{id}")]
pub async fn get_task(
    service: web::Data<TaskService>,
    id: web::Path<i64>,
    caller: Caller,
) -> Result<impl Responder, AppError> {
    match service.get(id.into_inner(), caller).await? {
        Some(task) => Ok(HttpResponse::Ok().json(task)),
        None => Err(AppError::NotFound("Task not found".into())),
    }
}

/// Updates a task, creating it when no row matches the caller's scope.
/// The create fallback is intentional; clients PUT tasks they have never
/// POSTed.
#[put("/{id}")]
pub async fn update_task(
    service: web::Data<TaskService>,
    id: web::Path<i64>,
    body: web::Json<TaskInput>,
    caller: Caller,
) -> Result<impl Responder, AppError> {
    body.validate()?;

    let task = service.update(id.into_inner(), &body, caller).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task under the caller's ownership scope. Missing or foreign
/// tasks report 404, never silent success.
#[delete("/{id}")]
pub async fn delete_task(
    service: web::Data<TaskService>,
    id: web::Path<i64>,
    caller: Caller,
) -> Result<impl Responder, AppError> {
    service.delete(id.into_inner(), caller).await?;
    Ok(HttpResponse::NoContent().finish())
}
