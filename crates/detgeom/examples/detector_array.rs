//! Build the default detector column, report the detector volumes and the
//! resulting model.
//!
//! Run with `RUST_LOG=detgeom_model=trace` to see the per-universe search
//! diagnostics.

use detgeom::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,detgeom_model=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ArrayConfig::default();
    let array = DetectorArray::build(&config)?;

    let detectors = array.detector_cells()?;
    for m in &detectors {
        tracing::info!(root = %m.root, cell = %m.cell, bounding_box = %m.bounding_box, "detector volume");
    }

    let holder = array.geometry().cell(array.holder()).map(|c| c.region().to_string());
    tracing::info!(region = ?holder, "holder region");

    let tally = array.flux_tally()?;
    let model = Model::new(array.into_geometry(), RunSettings::default(), vec![tally])?;
    tracing::info!(
        cells = model.geometry().cell_count(),
        surfaces = model.geometry().surfaces().len(),
        tallies = model.tallies().len(),
        particles = model.settings().particles,
        "model ready"
    );
    Ok(())
}
