use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub organisation_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default)]
    pub base_currency: String,
    #[serde(default)]
    pub bank_id: String,
    #[serde(default)]
    pub bank_id_code: String,
    #[serde(default)]
    pub bic: String,
    #[serde(default)]
    pub name: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub data: Account,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_message: String,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    pub version: i64,
}

pub type Db = Arc<RwLock<HashMap<Uuid, Account>>>;

type Rejection = (StatusCode, Json<ErrorBody>);

fn reject(status: StatusCode, message: impl Into<String>) -> Rejection {
    (
        status,
        Json(ErrorBody {
            error_message: message.into(),
        }),
    )
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/v1/organisation/accounts", post(create_account))
        .route(
            "/v1/organisation/accounts/{id}",
            get(fetch_account).delete(delete_account),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "accounts mock server listening");
    }
    axum::serve(listener, app()).await
}

fn parse_id(id: &str) -> Result<Uuid, Rejection> {
    Uuid::parse_str(id).map_err(|_| reject(StatusCode::BAD_REQUEST, "id is not a valid uuid"))
}

/// Check an incoming account against the fields the API requires.
pub fn validate(account: &Account) -> Result<Uuid, String> {
    if account.kind != "accounts" {
        return Err("type must be 'accounts'".to_string());
    }
    let id = Uuid::parse_str(&account.id).map_err(|_| "id is not a valid uuid".to_string())?;
    Uuid::parse_str(&account.organisation_id)
        .map_err(|_| "organisationId is not a valid uuid".to_string())?;
    let attributes = account
        .attributes
        .as_ref()
        .ok_or_else(|| "attributes are required".to_string())?;
    if attributes.country.as_deref().map_or(true, str::is_empty) {
        return Err("attributes.country is required".to_string());
    }
    if attributes.bank_id_code.is_empty() {
        return Err("attributes.bankIdCode is required".to_string());
    }
    if attributes.name.is_empty() {
        return Err("attributes.name is required".to_string());
    }
    Ok(id)
}

async fn create_account(
    State(db): State<Db>,
    Json(input): Json<Envelope>,
) -> Result<(StatusCode, Json<Envelope>), Rejection> {
    let id = validate(&input.data).map_err(|msg| reject(StatusCode::BAD_REQUEST, msg))?;

    let mut accounts = db.write().await;
    if accounts.contains_key(&id) {
        return Err(reject(
            StatusCode::CONFLICT,
            "Account cannot be created as it violates a duplicate constraint",
        ));
    }
    let account = Account {
        version: Some(0),
        ..input.data
    };
    accounts.insert(id, account.clone());
    Ok((StatusCode::CREATED, Json(Envelope { data: account })))
}

async fn fetch_account(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<Envelope>, Rejection> {
    let id = parse_id(&id)?;
    let accounts = db.read().await;
    accounts
        .get(&id)
        .cloned()
        .map(|data| Json(Envelope { data }))
        .ok_or_else(|| {
            reject(
                StatusCode::NOT_FOUND,
                format!("record {id} does not exist"),
            )
        })
}

async fn delete_account(
    State(db): State<Db>,
    Path(id): Path<String>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, Rejection> {
    let id = parse_id(&id)?;
    let mut accounts = db.write().await;
    let account = accounts.get(&id).ok_or_else(|| {
        reject(
            StatusCode::NOT_FOUND,
            format!("record {id} does not exist"),
        )
    })?;
    if account.version != Some(params.version) {
        return Err(reject(StatusCode::CONFLICT, "invalid version"));
    }
    accounts.remove(&id);
    Ok(StatusCode::NO_CONTENT)
}
