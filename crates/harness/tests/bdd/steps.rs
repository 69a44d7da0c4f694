//! Step definitions.
//!
//! The sentence patterns are the harness's public contract; feature
//! files depend on them verbatim. `When` steps build and issue exactly
//! one request through the world's client; `Then` steps delegate to the
//! verifier.

use cucumber::gherkin::Step;
use cucumber::{then, when};
use restcheck_domain::{BodyTable, Endpoint, Method, PathSuffix, QueryParams, RequestSpec};
use serde_json::json;

use crate::world::ApiWorld;

/// Extracts key-value pairs from a step's data table, skipping the
/// header row, as the table contract prescribes.
fn table_rows(step: &Step) -> Vec<(String, String)> {
    let table = step
        .table
        .as_ref()
        .unwrap_or_else(|| panic!("step '{}' requires a data table", step.value));
    table
        .rows
        .iter()
        .skip(1)
        .map(|row| {
            (
                row.first().cloned().unwrap_or_default(),
                row.get(1).cloned().unwrap_or_default(),
            )
        })
        .collect()
}

#[when(
    regex = r"^I make a (GET|DELETE) request to the (Posts|Comments|Albums|Photos|ToDos|Users) endpoint$"
)]
async fn make_request(world: &mut ApiWorld, method: Method, endpoint: Endpoint) {
    world.send(RequestSpec::new(method, endpoint)).await;
}

#[when(
    regex = r"^I make a (GET|DELETE) request to the (Posts|Comments|Albums|Photos|ToDos|Users) endpoint with a path parameter of (-?\d+)$"
)]
async fn make_request_with_path(world: &mut ApiWorld, method: Method, endpoint: Endpoint, id: i64) {
    world
        .send(RequestSpec::new(method, endpoint).with_suffix(PathSuffix::Id(id)))
        .await;
}

#[when(
    regex = r"^I make a (POST|PUT) request with an empty body to the (Posts|Comments|Albums|Photos|ToDos|Users) endpoint$"
)]
async fn make_request_with_empty_body(world: &mut ApiWorld, method: Method, endpoint: Endpoint) {
    world
        .send(RequestSpec::new(method, endpoint).with_body(BodyTable::new()))
        .await;
}

#[when(
    regex = r"^I make a (POST|PUT) request with an empty body to the (Posts|Comments|Albums|Photos|ToDos|Users) endpoint with a path parameter of (-?\d+)$"
)]
async fn make_request_with_empty_body_and_path(
    world: &mut ApiWorld,
    method: Method,
    endpoint: Endpoint,
    id: i64,
) {
    world
        .send(
            RequestSpec::new(method, endpoint)
                .with_suffix(PathSuffix::Id(id))
                .with_body(BodyTable::new()),
        )
        .await;
}

#[when(
    regex = r"^I make a (POST|PUT) request with the following body to the (Posts|Comments|Albums|Photos|ToDos|Users) endpoint$"
)]
async fn make_request_with_body(
    world: &mut ApiWorld,
    step: &Step,
    method: Method,
    endpoint: Endpoint,
) {
    let body: BodyTable = table_rows(step).into_iter().collect();
    world
        .send(RequestSpec::new(method, endpoint).with_body(body))
        .await;
}

#[when(
    regex = r"^I make a (POST|PUT) request with the following body to the (Posts|Comments|Albums|Photos|ToDos|Users) endpoint with a path parameter of (-?\d+)$"
)]
async fn make_request_with_body_and_path(
    world: &mut ApiWorld,
    step: &Step,
    method: Method,
    endpoint: Endpoint,
    id: i64,
) {
    let body: BodyTable = table_rows(step).into_iter().collect();
    world
        .send(
            RequestSpec::new(method, endpoint)
                .with_suffix(PathSuffix::Id(id))
                .with_body(body),
        )
        .await;
}

#[when(
    regex = r#"^I make a GET request to the (Posts|Comments|Albums|Photos|ToDos|Users) endpoint with an? "(.*)" query parameter of (.*)$"#
)]
async fn make_get_request_with_query(
    world: &mut ApiWorld,
    endpoint: Endpoint,
    key: String,
    value: String,
) {
    world
        .send(
            RequestSpec::new(Method::Get, endpoint).with_query(QueryParams::single(key, value)),
        )
        .await;
}

#[when(
    regex = r"^I make a GET request to the (Posts|Comments|Albums|Photos|ToDos|Users) endpoint with nested path parameters of (-?\d+)/(\w+)$"
)]
async fn make_get_request_with_nested_path(
    world: &mut ApiWorld,
    endpoint: Endpoint,
    id: i64,
    subresource: String,
) {
    world
        .send(
            RequestSpec::new(Method::Get, endpoint)
                .with_suffix(PathSuffix::Nested { id, subresource }),
        )
        .await;
}

#[then(expr = "the response has a status code of {int}")]
async fn verify_status_code(world: &mut ApiWorld, code: u16) {
    ApiWorld::check(world.verifier().status_code(&world.ctx, code));
}

#[then(expr = "the response body follows the {string} JSON schema")]
async fn verify_schema(world: &mut ApiWorld, name: String) {
    ApiWorld::check(world.verifier().matches_schema(&world.ctx, &name));
}

#[then(expr = "the results array contains {int} elements")]
async fn verify_array_len(world: &mut ApiWorld, count: usize) {
    ApiWorld::check(world.verifier().array_len(&world.ctx, count));
}

#[then(expr = "the response body matches the {string} expected response")]
async fn verify_expected_response(world: &mut ApiWorld, name: String) {
    ApiWorld::check(world.verifier().matches_fixture(&world.ctx, &name));
}

#[then(
    regex = r#"^the response body matches the (\d+)(?:st|nd|rd|th) (?:post|comment|album|photo|todo|user) in the "(.*)" expected response$"#
)]
async fn verify_expected_response_element(world: &mut ApiWorld, index: usize, name: String) {
    ApiWorld::check(
        world
            .verifier()
            .matches_fixture_element(&world.ctx, index, &name),
    );
}

#[then("the response body matches the following")]
async fn verify_body_table(world: &mut ApiWorld, step: &Step) {
    let rows = table_rows(step);
    ApiWorld::check(world.verifier().matches_table(&world.ctx, &rows));
}

#[then("the response body is an empty JSON object")]
async fn verify_empty_object(world: &mut ApiWorld) {
    ApiWorld::check(world.verifier().empty_object(&world.ctx));
}

#[then("the two response bodies are identical")]
async fn verify_responses_identical(world: &mut ApiWorld) {
    ApiWorld::check(world.verifier().responses_identical(&world.ctx));
}

#[then(regex = r#"^the "(id|userId)" field in the response body has a value of (-?\d+)$"#)]
async fn verify_numeric_field(world: &mut ApiWorld, field: String, value: i64) {
    ApiWorld::check(world.verifier().field_equals(&world.ctx, &field, &json!(value)));
}

#[then(expr = "the {string} field in the response body has a value of {string}")]
async fn verify_string_field(world: &mut ApiWorld, field: String, value: String) {
    ApiWorld::check(world.verifier().field_equals(&world.ctx, &field, &json!(value)));
}

#[then(expr = "the {string} field in the response body has a value of")]
async fn verify_field_docstring(world: &mut ApiWorld, step: &Step, field: String) {
    let value = step
        .docstring
        .as_ref()
        .unwrap_or_else(|| panic!("step '{}' requires a docstring", step.value))
        .trim_matches('\n')
        .to_string();
    ApiWorld::check(world.verifier().field_equals(&world.ctx, &field, &json!(value)));
}
