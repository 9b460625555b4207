//! Actix Web interface: the date filter form and the rendered map artifact.
//!
//! Both index routes run the full pipeline against the configured history
//! file; `GET /map.html` serves the stored artifact verbatim. Requests are
//! processed one at a time with plain blocking file I/O, and the artifact
//! slot is unlocked: when requests overlap, the last writer wins.

use std::path::PathBuf;

use actix_web::{web, App, HttpResponse, HttpServer};
use serde::Deserialize;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::filter::DateFilter;
use crate::{page, pipeline};

/// Shared state backing the HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Path to the location-history document, re-read per request.
    pub history_path: PathBuf,
    /// Path of the single map artifact slot.
    pub artifact_path: PathBuf,
}

impl AppState {
    /// Build handler state from the application configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            history_path: config.history_path(),
            artifact_path: config.artifact_path(),
        }
    }
}

/// Date filter fields submitted by the index form.
#[derive(Debug, Deserialize)]
pub struct FilterForm {
    year: Option<String>,
    month: Option<String>,
    day: Option<String>,
}

impl FilterForm {
    fn criteria(&self) -> Result<DateFilter> {
        DateFilter::from_form(
            self.year.as_deref(),
            self.month.as_deref(),
            self.day.as_deref(),
        )
    }
}

/// Run the web interface until the process is stopped.
///
/// # Errors
///
/// Returns an error if the server cannot bind or fails while running.
pub fn run(config: &Config) -> Result<()> {
    let state = AppState::from_config(config);
    let host = config.server.host.clone();
    let port = config.server.port;
    info!("serving on http://{host}:{port}");

    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state.clone()))
                .route("/", web::get().to(index_get))
                .route("/", web::post().to(index_post))
                .route("/map.html", web::get().to(map_page))
        })
        .bind((host.as_str(), port))?
        .run()
        .await
    })?;
    Ok(())
}

/// Serve the form with an unfiltered render.
async fn index_get(state: web::Data<AppState>) -> HttpResponse {
    render_index(&state, &DateFilter::default())
}

/// Apply the submitted filter, re-render, and serve the form.
async fn index_post(state: web::Data<AppState>, form: web::Form<FilterForm>) -> HttpResponse {
    match form.criteria() {
        Ok(criteria) => render_index(&state, &criteria),
        Err(err) => error_response(&err),
    }
}

fn render_index(state: &AppState, criteria: &DateFilter) -> HttpResponse {
    match pipeline::run(&state.history_path, &state.artifact_path, criteria) {
        Ok((date_options, outcome)) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(page::index_page(&date_options, criteria, outcome)),
        Err(err) => error_response(&err),
    }
}

/// Serve the most recently persisted map artifact verbatim.
async fn map_page(state: web::Data<AppState>) -> HttpResponse {
    match pipeline::read_artifact(&state.artifact_path) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(err) if err.is_artifact_missing() => HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("map not rendered yet"),
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &Error) -> HttpResponse {
    error!("request failed: {err}");
    if err.is_client_error() {
        HttpResponse::BadRequest().body(err.to_string())
    } else {
        HttpResponse::InternalServerError().body(err.to_string())
    }
}
