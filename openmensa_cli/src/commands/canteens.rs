//! The `canteens` subcommand: lists the whole canteen directory.

use anyhow::Result;
use clap::Args;
use openmensa_lib::openmensa_api::Client;
use openmensa_lib::validation;
use openmensa_lib::{ApiSource, CanteenQuery, Catalog, ClientConfig, Near};

use super::{base_query, with_spinner};
use crate::output::{print_canteens, OutputFormat};

#[derive(Args)]
pub struct CanteensArgs {
    /// Only these canteen IDs (comma-separated, e.g. 1,2,229)
    #[arg(long)]
    pub ids: Option<String>,

    /// Only canteens near a point: LAT,LNG (e.g. 49.45,11.08)
    #[arg(long, allow_hyphen_values = true)]
    pub near: Option<String>,

    /// Search radius around --near in kilometres
    #[arg(long, requires = "near")]
    pub dist: Option<f64>,

    /// Only canteens with known coordinates
    #[arg(long)]
    pub with_coordinates: bool,
}

/// Turns the command-line filters into a canteen query.
pub fn build_query(args: &CanteensArgs, config: &ClientConfig) -> Result<CanteenQuery> {
    let mut query = base_query(config);

    if let Some(ids) = &args.ids {
        query = query.with_ids(&validation::validate_canteen_ids(ids)?);
    }

    if let Some(near) = &args.near {
        let (lat, lng) = validation::validate_coordinates(near)?;
        query = query.with_near(Near {
            lat,
            lng,
            dist: args.dist,
        });
    }

    if args.with_coordinates {
        query = query.with_has_coordinates(true);
    }

    Ok(query)
}

pub async fn run(
    args: &CanteensArgs,
    client: Client,
    config: &ClientConfig,
    format: &OutputFormat,
) -> Result<()> {
    let query = build_query(args, config)?;
    let catalog = Catalog::new(ApiSource::with_query(client, query));

    let canteens = with_spinner("Fetching canteens", catalog.list_all_canteens()).await?;
    eprintln!("{} canteens", canteens.len());

    print_canteens(&canteens, format)
}
