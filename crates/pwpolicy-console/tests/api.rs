#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use pwpolicy_console::api::handlers::{self, PolicyStringBody, RowsBody};
use pwpolicy_console::app_state::AppState;
use pwpolicy_console::config;
use pwpolicy_core::policy::PolicyRow;

const CFG: &str = r#"
version: 1
catalog:
  - { id: length, displayName: Minimum length, defaultValue: "8", configType: int }
  - { id: digits, displayName: Digits, defaultValue: "1", configType: int }
  - { id: notUsername, displayName: Not username }
realms:
  - id: master
    passwordPolicy: "length(8) and hashIterations(27500)"
  - id: demo
"#;

fn state() -> AppState {
    AppState::new(config::load_from_str(CFG).unwrap()).unwrap()
}

#[tokio::test]
async fn lists_catalog_and_realms() {
    let st = state();
    let Json(types) = handlers::list_policy_types(State(st.clone())).await;
    let ids: Vec<_> = types.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["length", "digits", "notUsername"]);

    let Json(realms) = handlers::list_realms(State(st)).await;
    assert_eq!(realms, ["demo", "master"]);
}

#[tokio::test]
async fn get_policy_parses_and_lists_available() {
    let st = state();
    let Json(view) = handlers::get_password_policy(State(st.clone()), Path("master".into()))
        .await
        .unwrap();

    assert_eq!(view.password_policy, "length(8) and hashIterations(27500)");
    assert_eq!(view.rows, [PolicyRow::new("length", "8")]);
    let available: Vec<_> = view.available.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(available, ["digits", "notUsername"]);

    assert_eq!(
        st.metrics().unknown_segments.get(&[("realm", "master")]),
        1
    );
}

#[tokio::test]
async fn get_policy_unknown_realm_is_404() {
    let st = state();
    let err = handlers::get_password_policy(State(st.clone()), Path("nope".into()))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(st.metrics().api_errors.get(&[("code", "NOT_FOUND")]), 1);
}

#[tokio::test]
async fn put_policy_stores_serialized_rows() {
    let st = state();
    let body = RowsBody {
        rows: vec![PolicyRow::new("digits", "2"), PolicyRow::new("notUsername", "")],
        ..RowsBody::default()
    };
    let Json(out) = handlers::put_password_policy(State(st.clone()), Path("demo".into()), Json(body))
        .await
        .unwrap();
    assert_eq!(out.password_policy.as_deref(), Some("digits(2) and notUsername()"));

    let stored = st.store().realm_policy("demo").await.unwrap();
    assert_eq!(stored.policy_str(), "digits(2) and notUsername()");
    assert_eq!(
        st.metrics().policy_updates.get(&[("realm", "demo"), ("outcome", "ok")]),
        1
    );
}

#[tokio::test]
async fn put_empty_rows_clears_policy() {
    let st = state();
    let Json(out) = handlers::put_password_policy(
        State(st.clone()),
        Path("master".into()),
        Json(RowsBody::default()),
    )
    .await
    .unwrap();
    assert!(out.password_policy.is_none());
    assert_eq!(st.store().realm_policy("master").await.unwrap().policy_str(), "");
}

#[tokio::test]
async fn put_policy_rejects_invalid_rows() {
    let st = state();
    let bad_value = RowsBody {
        rows: vec![PolicyRow::new("length", "long")],
        ..RowsBody::default()
    };
    let err = handlers::put_password_policy(State(st.clone()), Path("master".into()), Json(bad_value))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    // unknown kind in the body is the client's mistake, not a missing realm
    let unknown = RowsBody {
        rows: vec![PolicyRow::new("hashIterations", "1")],
        ..RowsBody::default()
    };
    let err = handlers::put_password_policy(State(st.clone()), Path("master".into()), Json(unknown))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(st.metrics().api_errors.get(&[("code", "BAD_REQUEST")]), 2);

    // stored value untouched
    let stored = st.store().realm_policy("master").await.unwrap();
    assert_eq!(stored.policy_str(), "length(8) and hashIterations(27500)");
    assert_eq!(
        st.metrics().policy_updates.get(&[("realm", "master"), ("outcome", "rejected")]),
        2
    );
}

#[tokio::test]
async fn stateless_parse_and_serialize() {
    let st = state();
    let Json(parsed) = handlers::parse_policy(
        State(st.clone()),
        Json(PolicyStringBody {
            password_policy: Some("length(8) and unknownKind(x) and digits()".into()),
        }),
    )
    .await;
    assert_eq!(
        parsed.rows,
        [PolicyRow::new("length", "8"), PolicyRow::new("digits", "")]
    );

    let Json(absent) = handlers::parse_policy(
        State(st.clone()),
        Json(PolicyStringBody { password_policy: None }),
    )
    .await;
    assert!(absent.rows.is_empty());

    let Json(out) = handlers::serialize_policy(State(st.clone()), Json(parsed)).await;
    assert_eq!(out.password_policy.as_deref(), Some("length(8) and digits()"));

    assert_eq!(st.metrics().codec_calls.get(&[("op", "parse")]), 2);
    let text = st.metrics().render();
    assert!(text.contains("pwpolicy_codec_calls_total{op=\"serialize\"} 1"));
}

#[tokio::test]
async fn submitted_values_override_row_values() {
    let st = state();
    let mut body = RowsBody {
        rows: vec![PolicyRow::new("length", "8"), PolicyRow::new("digits", "1")],
        ..RowsBody::default()
    };
    body.values.insert("length".into(), " 16 ".into());

    let Json(out) = handlers::serialize_policy(State(st.clone()), Json(body)).await;
    // stateless serialize emits values verbatim
    assert_eq!(out.password_policy.as_deref(), Some("length( 16 ) and digits(1)"));

    let mut body = RowsBody {
        rows: vec![PolicyRow::new("length", "8")],
        ..RowsBody::default()
    };
    body.values.insert("length".into(), " 16 ".into());
    body.values.insert("digits".into(), "4".into());

    let Json(out) = handlers::put_password_policy(State(st.clone()), Path("demo".into()), Json(body))
        .await
        .unwrap();
    assert_eq!(out.password_policy.as_deref(), Some("length(16)"));
}

#[test]
fn rows_body_values_are_optional_json() {
    let body: RowsBody = serde_json::from_str(r#"{"rows":[{"id":"length","value":"8"}]}"#).unwrap();
    assert!(body.values.is_empty());
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"rows":[{"id":"length","value":"8"}]}"#);
}
