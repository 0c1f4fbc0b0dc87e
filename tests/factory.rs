mod common;

use axum::http::Method;
use axum::response::IntoResponse;
use common::{puppy_model, puppy_type};
use crud_resource::resource::{build, Namespace};
use crud_resource::{
    handler_fn, AppError, ConfigError, CrudRequest, Operation, ResourceDefinition, ResourceFactory,
    SharedModel, SharedType,
};
use std::sync::Arc;

fn puppies() -> ResourceDefinition {
    ResourceDefinition::new("PuppyResource")
        .model(puppy_model())
        .resource_type(puppy_type())
}

#[test]
fn missing_model_is_reported_by_name() {
    let def = ResourceDefinition::new("PuppyResource").resource_type(puppy_type());
    let err = build(def).unwrap_err();
    assert!(matches!(err, ConfigError::MissingAttribute { attribute: "model", .. }));
    assert_eq!(err.to_string(), "PuppyResource needs to define attribute: \"model\"");
}

#[test]
fn missing_type_is_reported_by_name() {
    let def = ResourceDefinition::new("PuppyResource").model(puppy_model());
    let err = build(def).unwrap_err();
    assert!(matches!(err, ConfigError::MissingAttribute { attribute: "type", .. }));
    assert_eq!(err.to_string(), "PuppyResource needs to define attribute: \"type\"");
}

#[test]
fn model_is_checked_before_type() {
    let err = build(ResourceDefinition::new("Empty")).unwrap_err();
    assert!(matches!(err, ConfigError::MissingAttribute { attribute: "model", .. }));
}

#[test]
fn unknown_method_lists_valid_names() {
    let err = build(puppies().methods(["list", "archive"])).unwrap_err();
    match &err {
        ConfigError::InvalidMethod { method, .. } => assert_eq!(method, "archive"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Invalid method \"archive\", must be one of: list, replace, drop, create, retrieve, update, delete."
    );
}

#[test]
fn default_routes_cover_five_operations() {
    let resource = build(puppies()).unwrap();
    let table: Vec<(&str, Method, &str)> = resource
        .routes()
        .iter()
        .map(|r| (r.path, r.verb.clone(), r.name.as_str()))
        .collect();
    assert_eq!(
        table,
        vec![
            ("/", Method::POST, "create"),
            ("/{element_id}/", Method::GET, "retrieve"),
            ("/{element_id}/", Method::PUT, "update"),
            ("/{element_id}/", Method::DELETE, "delete"),
            ("/", Method::GET, "list"),
        ]
    );
    assert_eq!(resource.operations(), &Operation::DEFAULT);
}

#[test]
fn restricted_methods_give_two_collection_routes() {
    let resource = build(puppies().methods(["list", "create"])).unwrap();
    let routes = resource.routes();
    assert_eq!(routes.len(), 2);
    assert_eq!((routes[0].path, routes[0].verb.clone()), ("/", Method::GET));
    assert_eq!((routes[1].path, routes[1].verb.clone()), ("/", Method::POST));
    assert!(resource.handler("retrieve").is_none());
}

#[test]
fn all_seven_operations_can_be_selected() {
    let names: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
    let resource = build(puppies().methods(names.clone())).unwrap();
    let route_names: Vec<&str> = resource.routes().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(route_names, names);
    assert_eq!(resource.route(Operation::Drop).unwrap().verb, Method::DELETE);
    assert_eq!(resource.route(Operation::Replace).unwrap().path, "/");
}

#[test]
fn supplied_handler_is_not_overwritten() {
    let custom = handler_fn(|_req: CrudRequest| async {
        Ok::<_, AppError>(axum::http::StatusCode::IM_A_TEAPOT.into_response())
    });
    let resource = build(puppies().handler("retrieve", custom.clone())).unwrap();

    let route = resource.route(Operation::Retrieve).unwrap();
    assert!(route.dispatches_to(&custom));
    assert!(Arc::ptr_eq(resource.handler("retrieve").unwrap(), &custom));
    assert!(!resource.route(Operation::Update).unwrap().dispatches_to(&custom));
}

#[test]
fn every_route_handler_lives_in_the_namespace() {
    let resource = build(puppies()).unwrap();
    for route in resource.routes() {
        let handler = resource.handler(&route.name).unwrap();
        assert!(route.dispatches_to(handler));
    }
}

#[test]
fn duplicate_method_is_rejected() {
    let err = build(puppies().methods(["list", "list"])).unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateMethod { ref method, .. } if method == "list"));
}

#[test]
fn missing_builder_is_an_invalid_method() {
    let factory = ResourceFactory::default().without_builder(Operation::Drop);
    let err = factory.build(puppies().methods(["drop"])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidMethod { ref method, .. } if method == "drop"));
}

#[test]
fn missing_builder_is_fine_when_handler_is_supplied() {
    let custom = handler_fn(|_req: CrudRequest| async {
        Ok::<_, AppError>(axum::http::StatusCode::NO_CONTENT.into_response())
    });
    let factory = ResourceFactory::empty();
    let resource = factory
        .build(puppies().methods(["drop"]).handler("drop", custom.clone()))
        .unwrap();
    assert!(resource.route(Operation::Drop).unwrap().dispatches_to(&custom));
}

fn add_marker_list(namespace: &mut Namespace, _model: &SharedModel, _type: &SharedType) {
    namespace.insert(
        "list".into(),
        handler_fn(|_req: CrudRequest| async {
            Ok::<_, AppError>(axum::http::StatusCode::ACCEPTED.into_response())
        }),
    );
}

fn add_nothing(_namespace: &mut Namespace, _model: &SharedModel, _type: &SharedType) {}

#[test]
fn overridden_builder_is_used() {
    let factory = ResourceFactory::default().with_builder(Operation::List, add_marker_list);
    let resource = factory.build(puppies().methods(["list"])).unwrap();
    assert!(resource.route(Operation::List).is_some());
}

#[test]
fn builder_that_registers_nothing_fails_the_build() {
    let factory = ResourceFactory::default().with_builder(Operation::List, add_nothing);
    let err = factory.build(puppies().methods(["list"])).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(_)));
}

#[test]
fn builders_receive_the_definitions_type() {
    let resource = build(puppies()).unwrap();
    assert_eq!(resource.resource_type().name(), "puppy_type");
    assert_eq!(resource.model().name(), "puppy");
}

#[test]
fn routes_carry_their_operation() {
    let names: Vec<&str> = Operation::ALL.iter().map(|op| op.as_str()).collect();
    let resource = build(puppies().methods(names)).unwrap();
    for (route, op) in resource.routes().iter().zip(Operation::ALL) {
        assert_eq!(route.operation, op);
        assert_eq!(route.name, op.as_str());
        assert_eq!((route.path, route.verb.clone()), op.route());
    }
}
