//! REST API for the box advisor.
//!
//! Provides HTTP endpoints for the store counter and other clients.
//! Uses Axum as the web framework and supports CORS.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::{
    Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use serde_json::json;
use std::sync::OnceLock;
use tower_http::cors::{Any, CorsLayer};
use utoipa::{OpenApi, ToSchema};

use crate::config::{AdvisorSettings, ApiConfig};
use crate::inventory::STORE_INVENTORY;
use crate::model::{BoxTag, ItemRequest, ShippingBox, ValidationError, Wall, describe_box, format_box_size};
use crate::optimizer::{AdvisorConfig, recommend_box_with_config};
use crate::policy::PackingType;
use crate::recommendation::{
    BoxRecommendation, CalculationTrace, OversizedDetails, RejectedBox, TelescopedBox,
};
use crate::types::Dims;

#[derive(Clone)]
struct ApiState {
    advisor_config: AdvisorConfig,
}

static OPENAPI_DOC: OnceLock<utoipa::openapi::OpenApi> = OnceLock::new();

// SRI hashes verified against https://unpkg.com/swagger-ui-dist@5.17.14/ on 2025-10-29.
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
    <head>
        <meta charset="utf-8" />
        <title>box-advisor API Docs</title>
        <link
            rel="stylesheet"
            href="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui.css"
            integrity="sha384-wxLW6kwyHktdDGr6Pv1zgm/VGJh99lfUbzSn6HNHBENZlCN7W602k9VkGdxuFvPn"
            crossorigin="anonymous"
        />
    </head>
    <body>
        <div id="swagger-ui"></div>
        <script
            src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-bundle.js"
            integrity="sha384-wmyclcVGX/WhUkdkATwhaK1X1JtiNrr2EoYJ+diV3vj4v6OC5yCeSu+yW13SYJep"
            crossorigin="anonymous"
        ></script>
        <script
            src="https://unpkg.com/swagger-ui-dist@5.17.14/swagger-ui-standalone-preset.js"
            integrity="sha384-2YH8WDRaj7V2OqU/trsmzSagmk/E2SutiCsGkdgoQwC9pNUJV1u/141DHB6jgs8t"
            crossorigin="anonymous"
        ></script>
        <script>
            window.onload = function () {
                const ui = SwaggerUIBundle({
                    url: "/docs/openapi.json",
                    dom_id: "#swagger-ui",
                    presets: [SwaggerUIBundle.presets.apis, SwaggerUIStandalonePreset],
                    layout: "StandaloneLayout",
                });
                window.ui = ui;
            };
        </script>
    </body>
    </html>"##;

fn openapi_doc() -> &'static utoipa::openapi::OpenApi {
    OPENAPI_DOC.get_or_init(ApiDoc::openapi)
}

/// Request structure for the recommendation endpoint.
///
/// `packing_type` is parsed leniently: unknown keys fall back to `custom`.
#[derive(Deserialize, Clone, Debug, ToSchema)]
#[schema(
    example = json!({
        "length": 10.0,
        "width": 8.0,
        "height": 6.0,
        "weight": 12.5,
        "packing_type": "standard"
    })
)]
pub struct RecommendRequest {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    #[schema(nullable = true)]
    pub weight: Option<f64>,
    #[schema(example = "standard")]
    pub packing_type: String,
    #[serde(default)]
    #[schema(nullable = true)]
    pub custom_buffer: Option<f64>,
}

impl RecommendRequest {
    fn into_validated(self) -> Result<ItemRequest, ValidationError> {
        let item = ItemRequest {
            length: self.length,
            width: self.width,
            height: self.height,
            weight: self.weight,
            packing_type: PackingType::from_key_lenient(&self.packing_type),
            custom_buffer: self.custom_buffer,
        };
        item.validate()?;
        Ok(item)
    }
}

/// One inventory entry with its display strings.
#[derive(Serialize, ToSchema)]
pub struct InventoryEntry {
    #[serde(rename = "box")]
    pub shipping_box: ShippingBox,
    #[schema(example = "12\" × 10\" × 8\"")]
    pub size: String,
    #[schema(example = "Regular box - 200 PSI burst strength, single wall, max 40 lbs")]
    pub description: String,
}

impl From<&ShippingBox> for InventoryEntry {
    fn from(shipping_box: &ShippingBox) -> Self {
        Self {
            shipping_box: *shipping_box,
            size: format_box_size(shipping_box),
            description: describe_box(shipping_box),
        }
    }
}

/// One row of the packing policy table.
#[derive(Serialize, ToSchema)]
pub struct PackingTypeEntry {
    pub packing_type: PackingType,
    pub buffer: f64,
    pub description: String,
}

impl From<PackingType> for PackingTypeEntry {
    fn from(packing_type: PackingType) -> Self {
        let policy = packing_type.policy();
        Self {
            packing_type,
            buffer: policy.buffer,
            description: policy.description.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
struct ErrorResponse {
    error: String,
    details: String,
}

impl ErrorResponse {
    fn new(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: details.into(),
        }
    }
}

fn error_response(
    status: StatusCode,
    error: impl Into<String>,
    details: impl Into<String>,
) -> Response {
    (status, Json(ErrorResponse::new(error, details))).into_response()
}

fn json_deserialize_error(err: JsonRejection) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Invalid JSON data",
        err.to_string(),
    )
}

fn validation_error(details: impl Into<String>) -> Response {
    error_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        "Invalid input data",
        details,
    )
}

fn parse_recommend_request(
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Result<ItemRequest, Response> {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(err) => return Err(json_deserialize_error(err)),
    };

    payload
        .into_validated()
        .map_err(|err| validation_error(err.to_string()))
}

#[derive(OpenApi)]
#[openapi(
    paths(handle_recommend, handle_inventory, handle_packing_types),
    components(
        schemas(
            RecommendRequest,
            BoxRecommendation,
            TelescopedBox,
            CalculationTrace,
            RejectedBox,
            OversizedDetails,
            InventoryEntry,
            PackingTypeEntry,
            PackingType,
            ShippingBox,
            BoxTag,
            Wall,
            Dims,
            ErrorResponse
        )
    ),
    tags((name = "advisor", description = "Endpoints for box recommendations"))
)]
struct ApiDoc;

fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        // API endpoints
        .route("/recommend", post(handle_recommend))
        .route("/inventory", get(handle_inventory))
        .route("/packing-types", get(handle_packing_types))
        // API documentation
        .route("/docs/openapi.json", get(serve_openapi_json))
        .route("/docs", get(serve_openapi_ui))
        .layer(cors)
        .with_state(state)
}

/// Starts the API server.
///
/// Configures CORS for cross-origin requests.
/// Blocks until the server is terminated; fails if the address cannot be bound.
pub async fn start_api_server(config: ApiConfig, advisor: AdvisorSettings) -> std::io::Result<()> {
    let state = ApiState {
        advisor_config: advisor.advisor_config(),
    };
    let app = router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        "server running on http://{}:{}",
        config.display_host(),
        config.port()
    );
    if config.binds_to_all_interfaces() {
        tracing::info!("local access: http://localhost:{}", config.port());
    }
    tracing::info!("endpoints: POST /recommend, GET /inventory, GET /packing-types");
    tracing::info!("documentation: GET /docs, GET /docs/openapi.json");

    axum::serve(listener, app).await
}

/// Handler for POST /recommend endpoint.
///
/// Applies the packing buffer and picks a single box, a telescoped pair or
/// reports that the item is oversized. The oversized outcome is a regular
/// 200 response.
#[utoipa::path(
    post,
    path = "/recommend",
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Recommendation for the item", body = BoxRecommendation),
        (
            status = UNPROCESSABLE_ENTITY,
            description = "Invalid request",
            body = ErrorResponse
        )
    ),
    tag = "advisor"
)]
async fn handle_recommend(
    State(state): State<ApiState>,
    payload: Result<Json<RecommendRequest>, JsonRejection>,
) -> Response {
    let item = match parse_recommend_request(payload) {
        Ok(item) => item,
        Err(response) => return response,
    };

    tracing::info!(
        length = item.length,
        width = item.width,
        height = item.height,
        weight = ?item.weight,
        packing_type = item.packing_type.key(),
        "new recommendation request"
    );
    let recommendation = recommend_box_with_config(&item, STORE_INVENTORY, &state.advisor_config);
    tracing::info!(
        outcome = recommendation.outcome_code(),
        rejected = recommendation.rejected_boxes().len(),
        "recommendation finished"
    );

    (StatusCode::OK, Json(recommendation)).into_response()
}

/// Handler for GET /inventory endpoint.
#[utoipa::path(
    get,
    path = "/inventory",
    responses((status = 200, description = "All boxes in stock", body = [InventoryEntry])),
    tag = "advisor"
)]
async fn handle_inventory() -> Json<Vec<InventoryEntry>> {
    Json(STORE_INVENTORY.iter().map(InventoryEntry::from).collect())
}

/// Handler for GET /packing-types endpoint.
#[utoipa::path(
    get,
    path = "/packing-types",
    responses((status = 200, description = "Buffer per packing type", body = [PackingTypeEntry])),
    tag = "advisor"
)]
async fn handle_packing_types() -> Json<Vec<PackingTypeEntry>> {
    Json(PackingType::ALL.into_iter().map(PackingTypeEntry::from).collect())
}

async fn serve_openapi_json() -> impl IntoResponse {
    Json(openapi_doc())
}

async fn serve_openapi_ui() -> impl IntoResponse {
    Html(SWAGGER_UI_HTML)
}
