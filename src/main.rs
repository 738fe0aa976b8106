use crate::dataset::Dataset;
use crate::model::Regression;
use crate::opts::Opts;
use crate::prelude::*;

mod dataset;
mod model;
mod opts;
mod prelude;
mod tracing;
mod web;

fn main() -> Result {
    let opts = opts::parse();
    let _sentry_guard = tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(opts))
}

async fn run(opts: Opts) -> Result {
    let dataset = Dataset::load()?;
    let model = Regression::fit(dataset.features(), dataset.targets())?;
    model.save(&opts.model_path)?;
    info!(model.k, model.bias, path = ?opts.model_path, "model trained and persisted");
    web::run(&opts.host, opts.port, Arc::new(model)).await
}
