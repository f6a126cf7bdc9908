//! Tests for employee HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::Trace;
use crate::domain::ports::{MockEmployeeDirectoryCommand, MockEmployeeDirectoryQuery};
use crate::domain::{EmployeeDraft, TRACE_ID_HEADER};
use crate::inbound::http::validation::{json_config, path_config};

fn employee(id: i32, name: &str, role: &str) -> Employee {
    let draft = EmployeeDraft::try_from_parts(name, role).expect("fixture draft is valid");
    Employee::from_draft(EmployeeId::new(id), draft)
}

fn test_app(
    query: MockEmployeeDirectoryQuery,
    command: MockEmployeeDirectoryCommand,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(query), Arc::new(command));
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .configure(configure)
}

async fn call(
    query: MockEmployeeDirectoryQuery,
    command: MockEmployeeDirectoryCommand,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(query, command)).await;
    let res = actix_test::call_service(&app, request.to_request()).await;
    let status = res.status();
    let body = actix_test::read_body_json(res).await;
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn list_employees_serialises_in_order() {
    let mut query = MockEmployeeDirectoryQuery::new();
    query.expect_list_employees().times(1).return_once(|| {
        Ok(vec![
            employee(1, "Alice", "Dev"),
            employee(2, "Bob", "Designer"),
        ])
    });

    let (status, body) = call(
        query,
        MockEmployeeDirectoryCommand::new(),
        actix_test::TestRequest::get().uri("/employees"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Alice", "role": "Dev"},
            {"id": 2, "name": "Bob", "role": "Designer"},
        ])
    );
}

#[rstest]
#[actix_web::test]
async fn get_employee_maps_not_found() {
    let mut query = MockEmployeeDirectoryQuery::new();
    query
        .expect_get_employee()
        .with(eq(EmployeeId::new(7)))
        .times(1)
        .return_once(|_| Err(Error::not_found("Employee not found")));

    let (status, body) = call(
        query,
        MockEmployeeDirectoryCommand::new(),
        actix_test::TestRequest::get().uri("/employees/7"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "Employee not found");
}

#[rstest]
#[case::get(actix_test::TestRequest::get().uri("/employees/abc"))]
#[case::delete(actix_test::TestRequest::delete().uri("/employees/1.5"))]
#[case::put(
    actix_test::TestRequest::put()
        .uri("/employees/x")
        .set_json(json!({"name": "Alice", "role": "Dev"}))
)]
#[actix_web::test]
async fn non_integer_ids_are_rejected_without_port_calls(
    #[case] request: actix_test::TestRequest,
) {
    let (status, body) = call(
        MockEmployeeDirectoryQuery::new(),
        MockEmployeeDirectoryCommand::new(),
        request,
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"], json!({"field": "id", "code": "invalid_path"}));
}

#[rstest]
#[case(json!({"name": "Alice"}), Some("role"), "missing_field")]
#[case(json!({"role": "Dev"}), Some("name"), "missing_field")]
#[case(json!({"name": 42, "role": "Dev"}), None, "invalid_type")]
#[case(json!({"name": "   ", "role": "Dev"}), Some("name"), "empty_value")]
#[case(json!({"name": "Alice", "role": ""}), Some("role"), "empty_value")]
#[case(json!({"name": "a".repeat(256), "role": "Dev"}), Some("name"), "too_long")]
#[actix_web::test]
async fn invalid_create_payloads_never_reach_the_command_port(
    #[case] payload: Value,
    #[case] field: Option<&str>,
    #[case] code: &str,
) {
    let (status, body) = call(
        MockEmployeeDirectoryQuery::new(),
        MockEmployeeDirectoryCommand::new(),
        actix_test::TestRequest::post()
            .uri("/employees")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], code);
    assert_eq!(body["details"].get("field").and_then(Value::as_str), field);
    assert!(body["traceId"].is_string());
}

#[rstest]
#[case::get(actix_test::TestRequest::get().uri("/employees/3000000000"))]
#[case::delete(actix_test::TestRequest::delete().uri("/employees/3000000000"))]
#[case::put(
    actix_test::TestRequest::put()
        .uri("/employees/3000000000")
        .set_json(json!({"name": "Alice", "role": "Dev"}))
)]
#[case::negative(actix_test::TestRequest::get().uri("/employees/-2147483649"))]
#[actix_web::test]
async fn ids_beyond_the_id_column_are_not_found_without_port_calls(
    #[case] request: actix_test::TestRequest,
) {
    let (status, body) = call(
        MockEmployeeDirectoryQuery::new(),
        MockEmployeeDirectoryCommand::new(),
        request,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "Employee not found");
    assert!(body["traceId"].is_string());
}

#[rstest]
#[case(json!({"name": "Alice"}), Some("role"), "missing_field")]
#[case(json!({"role": "Dev"}), Some("name"), "missing_field")]
#[case(json!({"name": "Alice", "role": ["Dev"]}), None, "invalid_type")]
#[case(json!({"name": "", "role": "Dev"}), Some("name"), "empty_value")]
#[case(json!({"name": "Alice", "role": "\t "}), Some("role"), "empty_value")]
#[case(json!({"name": "Alice", "role": "r".repeat(256)}), Some("role"), "too_long")]
#[actix_web::test]
async fn invalid_update_payloads_never_reach_the_command_port(
    #[case] payload: Value,
    #[case] field: Option<&str>,
    #[case] code: &str,
) {
    let (status, body) = call(
        MockEmployeeDirectoryQuery::new(),
        MockEmployeeDirectoryCommand::new(),
        actix_test::TestRequest::put()
            .uri("/employees/1")
            .set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], code);
    assert_eq!(body["details"].get("field").and_then(Value::as_str), field);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_rejected() {
    let (status, body) = call(
        MockEmployeeDirectoryQuery::new(),
        MockEmployeeDirectoryCommand::new(),
        actix_test::TestRequest::post()
            .uri("/employees")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": "),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"]["code"], "invalid_json");
}

#[rstest]
#[actix_web::test]
async fn create_ignores_client_supplied_id() {
    let mut command = MockEmployeeDirectoryCommand::new();
    command
        .expect_create_employee()
        .times(1)
        .returning(|draft| Ok(Employee::from_draft(EmployeeId::new(1), draft)));

    let (status, body) = call(
        MockEmployeeDirectoryQuery::new(),
        command,
        actix_test::TestRequest::post()
            .uri("/employees")
            .set_json(json!({"id": 99, "name": "Alice", "role": "Dev"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Alice", "role": "Dev"}));
}

#[rstest]
#[actix_web::test]
async fn update_uses_path_id() {
    let mut command = MockEmployeeDirectoryCommand::new();
    command
        .expect_update_employee()
        .withf(|id, draft| *id == EmployeeId::new(1) && draft.name().as_ref() == "Alice2")
        .times(1)
        .returning(|id, draft| Ok(Employee::from_draft(id, draft)));

    let (status, body) = call(
        MockEmployeeDirectoryQuery::new(),
        command,
        actix_test::TestRequest::put()
            .uri("/employees/1")
            .set_json(json!({"name": "Alice2", "role": "Lead"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Alice2", "role": "Lead"}));
}

#[rstest]
#[case(Ok(()), StatusCode::OK)]
#[case(Err(Error::not_found("Employee not found")), StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn delete_reports_outcome(#[case] outcome: Result<(), Error>, #[case] expected: StatusCode) {
    let mut command = MockEmployeeDirectoryCommand::new();
    command
        .expect_delete_employee()
        .with(eq(EmployeeId::new(2)))
        .times(1)
        .return_once(move |_| outcome);

    let (status, body) = call(
        MockEmployeeDirectoryQuery::new(),
        command,
        actix_test::TestRequest::delete().uri("/employees/2"),
    )
    .await;

    assert_eq!(status, expected);
    if expected == StatusCode::OK {
        assert_eq!(body, json!({"message": "Employee deleted successfully"}));
    } else {
        assert_eq!(body["code"], "not_found");
    }
}

#[rstest]
#[actix_web::test]
async fn internal_errors_surface_message_and_trace_header() {
    let mut query = MockEmployeeDirectoryQuery::new();
    query.expect_list_employees().times(1).return_once(|| {
        Err(Error::internal(
            "employee repository connection failed: pool timed out",
        ))
    });

    let app = actix_test::init_service(test_app(query, MockEmployeeDirectoryCommand::new())).await;
    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/employees").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["code"], "internal_error");
    assert_eq!(
        body["message"],
        "employee repository connection failed: pool timed out"
    );
}
