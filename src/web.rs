//! Prediction API.

use std::net::IpAddr;
use std::str::FromStr;

use poem::listener::TcpListener;
use poem::middleware::{CatchPanic, Tracing};
use poem::web::{Data, Query};
use poem::{get, handler, Endpoint, EndpointExt, Response, Route, Server};
use serde::Deserialize;

use crate::model::Regression;
use crate::prelude::*;
use crate::web::middleware::{ErrorMiddleware, SentryMiddleware};

pub mod middleware;

pub async fn run(host: &str, port: u16, model: Arc<Regression>) -> Result {
    let app = create_app(model);
    info!(host, port, "listening");
    Server::new(TcpListener::bind((IpAddr::from_str(host)?, port)))
        .run_with_graceful_shutdown(
            app,
            async {
                let _ = tokio::signal::ctrl_c().await;
            },
            None,
        )
        .await?;
    Ok(())
}

fn create_app(model: Arc<Regression>) -> impl Endpoint<Output = Response> {
    Route::new()
        .at("/isAlive", get(get_is_alive))
        .at("/prediction/", get(get_prediction))
        .data(model)
        .with(Tracing)
        .with(CatchPanic::new())
        .with(ErrorMiddleware)
        .with(SentryMiddleware)
}

#[handler]
#[instrument(skip_all, level = "info")]
async fn get_is_alive() -> &'static str {
    "true"
}

#[derive(Deserialize)]
struct PredictionQuery {
    f: Option<String>,
}

#[handler]
#[instrument(skip_all, level = "info")]
async fn get_prediction(
    Query(query): Query<PredictionQuery>,
    Data(model): Data<&Arc<Regression>>,
) -> Result<String> {
    let start_instant = Instant::now();
    let raw = query
        .f
        .ok_or_else(|| anyhow!("missing the `f` query parameter"))?;
    let feature =
        f64::from_str(&raw).with_context(|| format!("invalid feature value `{}`", raw))?;
    let prediction = model.predict(feature);
    debug!(feature, prediction, elapsed = ?start_instant.elapsed());
    Ok(format!("[{}]", prediction))
}
