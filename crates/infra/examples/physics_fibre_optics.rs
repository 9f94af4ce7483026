//! Example: Walking General Physics reference data down to a search
//!
//! Finds the fibre-optics branch of Photometry and Radiometry and pages
//! through every CMC published for it, printing the NMI behind each one.
//!
//! # Setup
//!
//! Uses the public KCDB server unless `KCDB_BASE_URL` or a `kcdb.toml` /
//! `kcdb.json` file says otherwise.
//!
//! ```bash
//! RUST_LOG=kcdb_infra=debug cargo run -p kcdb-infra --example physics_fibre_optics
//! ```

use anyhow::Context;
use futures::TryStreamExt;
use kcdb_core::pages;
use kcdb_domain::{filter_pattern, GeneralPhysicsSearch};
use kcdb_infra::{config, GeneralPhysics};
use regex::Regex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = config::load()?;
    let physics = GeneralPhysics::from_config(&config)?;

    let areas = physics.metrology_areas().await?;
    let photometry = areas
        .iter()
        .find(|area| area.label == "PR")
        .context("no Photometry and Radiometry area")?;

    let branches = physics.branches(photometry).await?;
    let fibre = filter_pattern(&branches, &Regex::new("(?i)fibre optics")?)
        .into_iter()
        .next()
        .context("no fibre-optics branch")?;

    println!("{} / {} ({})", photometry.value, fibre.value, fibre.label);

    let criteria = GeneralPhysicsSearch::new(photometry).branch(&fibre).page_size(50);
    let mut stream = std::pin::pin!(pages(&physics, criteria));
    while let Some(page) = stream.try_next().await? {
        println!(
            "\nPage {} of {} ({} CMCs in total)",
            page.page.page_number + 1,
            page.page.total_pages,
            page.page.total_elements
        );
        for cmc in &page.data {
            println!("  {:<24} {:<10} {}", cmc.common.kcdb_code, cmc.common.nmi_code, cmc.service_value);
        }
    }

    Ok(())
}
