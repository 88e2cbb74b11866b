//! HTTP boundary around the submission pipeline.
//!
//! Two routes, mirroring the orchestrator's wire contract:
//! `POST /graph` accepts a plan document and returns the transformed graph,
//! `GET /graph` returns the current graph or 404 when none is loaded.

use actix_web::{get, post, web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;
use serde_json::Value;

use crate::ingest::{submit_plan, SubmitError};
use crate::schema::Violation;
use crate::store::GraphStore;

/// Request bodies above this are refused before validation runs.
const JSON_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a [Violation]>,
}

impl<'a> ErrorBody<'a> {
    fn new(error: &'a str) -> Self {
        Self {
            error,
            details: None,
        }
    }

    fn with_details(error: &'a str, details: &'a [Violation]) -> Self {
        Self {
            error,
            details: Some(details),
        }
    }
}

#[post("/graph")]
async fn post_graph(store: web::Data<GraphStore>, body: web::Json<Value>) -> impl Responder {
    match submit_plan(&body, &store) {
        Ok(graph) => {
            tracing::info!(
                plan_id = %graph.metadata.id,
                nodes = graph.nodes.len(),
                edges = graph.edges.len(),
                "accepted plan"
            );
            HttpResponse::Created().json(graph)
        }
        Err(SubmitError::InvalidPlan(details)) => {
            tracing::warn!(violations = details.len(), "rejected plan payload");
            HttpResponse::BadRequest().json(ErrorBody::with_details(
                "Invalid plan payload",
                &details,
            ))
        }
        Err(SubmitError::InvalidGraph(details)) => {
            tracing::error!(
                violations = details.len(),
                "graph transformation produced invalid output"
            );
            HttpResponse::InternalServerError().json(ErrorBody::with_details(
                "Graph transformation produced invalid output",
                &details,
            ))
        }
    }
}

#[get("/graph")]
async fn get_graph(store: web::Data<GraphStore>) -> impl Responder {
    match store.current() {
        Some(graph) => HttpResponse::Ok().json(graph),
        None => HttpResponse::NotFound().json(ErrorBody::new(
            "No graph loaded. POST a plan first.",
        )),
    }
}

/// Mount the graph routes onto an actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(post_graph).service(get_graph);
}

/// Run the API server until shutdown, sharing one store across workers.
pub async fn run(host: &str, port: u16, store: GraphStore) -> std::io::Result<()> {
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::JsonConfig::default().limit(JSON_BODY_LIMIT))
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}
