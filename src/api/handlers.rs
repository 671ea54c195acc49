use actix_web::error::{InternalError, JsonPayloadError, PathError};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::db::error::StoreError;
use crate::db::items::TodoItems;
use crate::db::lists::TodoLists;
use crate::libs::messages::Message;
use crate::libs::todo::{NewTodoItem, NewTodoList, TodoListWithItems};

/// Configure all API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            // Lists; "/lists/open" must come before "/lists/{id}"
            .route("/lists", web::get().to(list_lists))
            .route("/lists", web::post().to(create_list))
            .route("/lists/open", web::get().to(list_lists_with_open_items))
            .route("/lists/{id}", web::get().to(get_list))
            .route("/lists/{id}", web::delete().to(delete_list))
            // Items
            .route("/lists/{id}/items", web::post().to(create_item))
            .route("/lists/{id}/items", web::patch().to(set_item_completed))
            .route("/lists/{id}/items", web::delete().to(delete_item)),
    );
}

#[derive(Debug, Deserialize)]
pub struct ItemStatus {
    pub id: i64,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ItemRef {
    pub id: i64,
}

// ── Helpers ─────────────────────────────────────────────────────────

fn error_json(message: impl ToString) -> serde_json::Value {
    json!({ "error": message.to_string() })
}

/// Malformed bodies get the same `{"error": ...}` shape as handler errors.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(error_json(&err));
    InternalError::from_response(err, response).into()
}

fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::NotFound().json(error_json(&err));
    InternalError::from_response(err, response).into()
}

fn err_response(e: StoreError) -> HttpResponse {
    match &e {
        StoreError::Validation(_) => HttpResponse::BadRequest().json(error_json(&e)),
        StoreError::ConstraintViolation { .. } => HttpResponse::Conflict().json(error_json(&e)),
        _ => {
            tracing::error!("Internal error: {e}");
            HttpResponse::InternalServerError().json(error_json(Message::InternalServerError))
        }
    }
}

// ── Lists ───────────────────────────────────────────────────────────

async fn list_lists(state: web::Data<AppState>) -> HttpResponse {
    let db = state.db.lock();
    match TodoLists::new(&db.conn).all() {
        Ok(lists) => HttpResponse::Ok().json(lists),
        Err(e) => err_response(e),
    }
}

async fn list_lists_with_open_items(state: web::Data<AppState>) -> HttpResponse {
    let db = state.db.lock();
    match TodoLists::new(&db.conn).all_with_open_items() {
        Ok(lists) => HttpResponse::Ok().json(lists),
        Err(e) => err_response(e),
    }
}

async fn create_list(state: web::Data<AppState>, body: web::Json<NewTodoList>) -> HttpResponse {
    let db = state.db.lock();
    let new_list = body.into_inner();
    match TodoLists::new(&db.conn).create(&new_list) {
        Ok(id) => HttpResponse::Created().json(json!({
            "id": id,
            "title": new_list.title.trim(),
            "description": new_list.description,
        })),
        Err(e) => err_response(e),
    }
}

async fn get_list(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    let db = state.db.lock();

    let list = match TodoLists::new(&db.conn).get_by_id(id) {
        Ok(Some(list)) => list,
        Ok(None) => return HttpResponse::NotFound().json(error_json(Message::ListNotFound(id))),
        Err(e) => return err_response(e),
    };

    match TodoItems::new(&db.conn).by_list(id) {
        Ok(items) => HttpResponse::Ok().json(TodoListWithItems { list, items }),
        Err(e) => err_response(e),
    }
}

async fn delete_list(state: web::Data<AppState>, path: web::Path<i64>) -> HttpResponse {
    let db = state.db.lock();
    match TodoLists::new(&db.conn).delete(path.into_inner()) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => err_response(e),
    }
}

// ── Items ───────────────────────────────────────────────────────────

async fn create_item(state: web::Data<AppState>, path: web::Path<i64>, body: web::Json<NewTodoItem>) -> HttpResponse {
    let list_id = path.into_inner();
    let new_item = body.into_inner();
    let db = state.db.lock();

    match TodoItems::new(&db.conn).create(list_id, &new_item) {
        Ok(id) => HttpResponse::Created().json(json!({
            "id": id,
            "text": new_item.text.trim(),
            "completed": false,
            "dueDate": new_item.due_date,
        })),
        Err(StoreError::ConstraintViolation { .. }) => HttpResponse::Conflict().json(error_json(Message::ItemListMissing(list_id))),
        Err(e) => err_response(e),
    }
}

async fn set_item_completed(state: web::Data<AppState>, body: web::Json<ItemStatus>) -> HttpResponse {
    let status = body.into_inner();
    let db = state.db.lock();
    match TodoItems::new(&db.conn).set_completed(status.id, status.completed) {
        Ok(_) => HttpResponse::Ok().json(json!({ "id": status.id, "completed": status.completed })),
        Err(e) => err_response(e),
    }
}

async fn delete_item(state: web::Data<AppState>, body: web::Json<ItemRef>) -> HttpResponse {
    let db = state.db.lock();
    match TodoItems::new(&db.conn).delete(body.id) {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(e) => err_response(e),
    }
}
