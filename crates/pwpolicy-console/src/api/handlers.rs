use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use pwpolicy_core::error::PolicyError;
use pwpolicy_core::policy::{parse, serialize_with_values, unknown_ids, PolicyDefinition, PolicyRow};

use super::error::ApiError;
use crate::app_state::AppState;
use crate::editor::PolicyEditor;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyStringBody {
    #[serde(default)]
    pub password_policy: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct RowsBody {
    pub rows: Vec<PolicyRow>,
    /// Submitted form values keyed by policy id; they override row values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub values: HashMap<String, String>,
}

/// Realm policy as the editor sees it after load.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyView {
    pub realm: String,
    pub password_policy: String,
    pub rows: Vec<PolicyRow>,
    pub available: Vec<PolicyDefinition>,
}

fn fail(state: &AppState, e: PolicyError) -> ApiError {
    state
        .metrics()
        .api_errors
        .inc(&[("code", e.client_code().as_str())]);
    ApiError(e)
}

pub async fn list_policy_types(State(state): State<AppState>) -> Json<Vec<PolicyDefinition>> {
    Json(state.catalog().iter().cloned().collect())
}

pub async fn list_realms(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store().realms().await)
}

pub async fn get_password_policy(
    State(state): State<AppState>,
    Path(realm): Path<String>,
) -> Result<Json<PolicyView>, ApiError> {
    let stored = state
        .store()
        .realm_policy(&realm)
        .await
        .map_err(|e| fail(&state, e))?;

    let catalog = state.catalog();
    let dropped = unknown_ids(stored.policy_str(), &catalog).len() as u64;
    if dropped > 0 {
        state.metrics().unknown_segments.add(&[("realm", realm.as_str())], dropped);
    }

    let editor = PolicyEditor::load(stored.policy_str(), catalog);
    Ok(Json(PolicyView {
        realm: stored.realm.clone(),
        password_policy: stored.policy_str().to_string(),
        rows: editor.rows().to_vec(),
        available: editor.available().into_iter().cloned().collect(),
    }))
}

pub async fn put_password_policy(
    State(state): State<AppState>,
    Path(realm): Path<String>,
    Json(body): Json<RowsBody>,
) -> Result<Json<PolicyStringBody>, ApiError> {
    let store = state.store();
    let stored = store.realm_policy(&realm).await.map_err(|e| fail(&state, e))?;

    let RowsBody { mut rows, values } = body;
    for row in &mut rows {
        if let Some(v) = values.get(&row.id) {
            row.value.clone_from(v);
        }
    }

    // The realm exists; an unknown kind is a problem with the request body.
    let mut editor = PolicyEditor::load(stored.policy_str(), state.catalog());
    let saved = editor
        .replace_rows(rows)
        .map_err(|e| match e {
            PolicyError::NotFound(msg) => PolicyError::BadRequest(msg),
            other => other,
        })
        .and_then(|_| editor.save());

    let policy = match saved {
        Ok(p) => p,
        Err(e) => {
            state
                .metrics()
                .policy_updates
                .inc(&[("realm", realm.as_str()), ("outcome", "rejected")]);
            return Err(fail(&state, e));
        }
    };

    let updated = store
        .update_password_policy(&realm, policy)
        .await
        .map_err(|e| fail(&state, e))?;

    state
        .metrics()
        .policy_updates
        .inc(&[("realm", realm.as_str()), ("outcome", "ok")]);
    tracing::info!(%realm, policy = %updated.policy_str(), "password policy updated");

    Ok(Json(PolicyStringBody {
        password_policy: updated.password_policy,
    }))
}

pub async fn parse_policy(
    State(state): State<AppState>,
    Json(body): Json<PolicyStringBody>,
) -> Json<RowsBody> {
    state.metrics().codec_calls.inc(&[("op", "parse")]);
    let policy = body.password_policy.as_deref().unwrap_or_default();
    Json(RowsBody {
        rows: parse(policy, &state.catalog()),
        ..RowsBody::default()
    })
}

pub async fn serialize_policy(
    State(state): State<AppState>,
    Json(body): Json<RowsBody>,
) -> Json<PolicyStringBody> {
    state.metrics().codec_calls.inc(&[("op", "serialize")]);
    Json(PolicyStringBody {
        password_policy: Some(serialize_with_values(&body.rows, &body.values)),
    })
}
