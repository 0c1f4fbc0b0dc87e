//! Default per-operation builders. Each one inserts a handler keyed by its operation name that
//! delegates to the resource's model and type.

use crate::error::AppError;
use crate::model::{SharedModel, SharedType};
use crate::resource::definition::Namespace;
use crate::resource::handler::{handler_fn, CrudRequest};
use crate::resource::operation::Operation;
use crate::response::{success_deleted, success_many, success_one, success_one_ok};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

/// Signature shared by every builder: (namespace, model, type).
pub type Builder = fn(&mut Namespace, &SharedModel, &SharedType);

fn serialize_all(type_: &SharedType, records: Vec<Value>) -> Result<Vec<Value>, AppError> {
    records.into_iter().map(|r| type_.serialize(r)).collect()
}

async fn list(model: SharedModel, type_: SharedType, req: CrudRequest) -> Result<Response, AppError> {
    tracing::debug!(model = model.name(), query = ?req.query, "list");
    let rows = model.list(&req.query).await?;
    let rows = serialize_all(&type_, rows)?;
    Ok(success_many(rows).into_response())
}

async fn replace(model: SharedModel, type_: SharedType, req: CrudRequest) -> Result<Response, AppError> {
    let items = match req.into_body()? {
        Value::Array(arr) => arr
            .into_iter()
            .map(|v| type_.validate(v))
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(AppError::BadRequest("body must be a JSON array".into())),
    };
    tracing::debug!(model = model.name(), count = items.len(), "replace");
    let rows = model.replace(items).await?;
    let rows = serialize_all(&type_, rows)?;
    Ok(success_many(rows).into_response())
}

async fn drop_all(model: SharedModel, _req: CrudRequest) -> Result<Response, AppError> {
    let deleted = model.drop_all().await?;
    tracing::debug!(model = model.name(), deleted, "drop");
    Ok(success_deleted(deleted).into_response())
}

async fn create(model: SharedModel, type_: SharedType, req: CrudRequest) -> Result<Response, AppError> {
    let item = type_.validate(req.into_body()?)?;
    tracing::debug!(model = model.name(), "create");
    let row = model.create(item).await?;
    Ok(success_one(type_.serialize(row)?).into_response())
}

async fn retrieve(model: SharedModel, type_: SharedType, req: CrudRequest) -> Result<Response, AppError> {
    let id = req.element_id()?;
    tracing::debug!(model = model.name(), id, "retrieve");
    let row = model
        .retrieve(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;
    Ok(success_one_ok(type_.serialize(row)?).into_response())
}

async fn update(model: SharedModel, type_: SharedType, req: CrudRequest) -> Result<Response, AppError> {
    let id = req.element_id()?.to_string();
    let item = type_.validate(req.into_body()?)?;
    tracing::debug!(model = model.name(), id = %id, "update");
    let row = model
        .update(&id, item)
        .await?
        .ok_or_else(|| AppError::NotFound(id))?;
    Ok(success_one_ok(type_.serialize(row)?).into_response())
}

async fn delete(model: SharedModel, req: CrudRequest) -> Result<Response, AppError> {
    let id = req.element_id()?;
    tracing::debug!(model = model.name(), id, "delete");
    if !model.delete(id).await? {
        return Err(AppError::NotFound(id.to_string()));
    }
    Ok(StatusCode::NO_CONTENT.into_response())
}

pub fn add_list(namespace: &mut Namespace, model: &SharedModel, type_: &SharedType) {
    let (model, type_) = (model.clone(), type_.clone());
    let handler = handler_fn(move |req| list(model.clone(), type_.clone(), req));
    namespace.insert(Operation::List.to_string(), handler);
}

pub fn add_replace(namespace: &mut Namespace, model: &SharedModel, type_: &SharedType) {
    let (model, type_) = (model.clone(), type_.clone());
    let handler = handler_fn(move |req| replace(model.clone(), type_.clone(), req));
    namespace.insert(Operation::Replace.to_string(), handler);
}

pub fn add_drop(namespace: &mut Namespace, model: &SharedModel, _type: &SharedType) {
    let model = model.clone();
    let handler = handler_fn(move |req| drop_all(model.clone(), req));
    namespace.insert(Operation::Drop.to_string(), handler);
}

pub fn add_create(namespace: &mut Namespace, model: &SharedModel, type_: &SharedType) {
    let (model, type_) = (model.clone(), type_.clone());
    let handler = handler_fn(move |req| create(model.clone(), type_.clone(), req));
    namespace.insert(Operation::Create.to_string(), handler);
}

pub fn add_retrieve(namespace: &mut Namespace, model: &SharedModel, type_: &SharedType) {
    let (model, type_) = (model.clone(), type_.clone());
    let handler = handler_fn(move |req| retrieve(model.clone(), type_.clone(), req));
    namespace.insert(Operation::Retrieve.to_string(), handler);
}

pub fn add_update(namespace: &mut Namespace, model: &SharedModel, type_: &SharedType) {
    let (model, type_) = (model.clone(), type_.clone());
    let handler = handler_fn(move |req| update(model.clone(), type_.clone(), req));
    namespace.insert(Operation::Update.to_string(), handler);
}

pub fn add_delete(namespace: &mut Namespace, model: &SharedModel, _type: &SharedType) {
    let model = model.clone();
    let handler = handler_fn(move |req| delete(model.clone(), req));
    namespace.insert(Operation::Delete.to_string(), handler);
}

/// Builders registered by a default factory.
pub fn default_builders() -> [(Operation, Builder); 7] {
    [
        (Operation::List, add_list as Builder),
        (Operation::Replace, add_replace),
        (Operation::Drop, add_drop),
        (Operation::Create, add_create),
        (Operation::Retrieve, add_retrieve),
        (Operation::Update, add_update),
        (Operation::Delete, add_delete),
    ]
}
