//! The `meals` subcommand: one canteen, one day.

use anyhow::Result;
use chrono::Local;
use clap::Args;
use openmensa_lib::openmensa_api::Client;
use openmensa_lib::validation;
use openmensa_lib::{ApiSource, Catalog};

use super::with_spinner;
use crate::output::{print_meal_listing, OutputFormat};

#[derive(Args)]
pub struct MealsArgs {
    /// Canteen ID (see the `canteens` subcommand)
    #[arg(long)]
    pub canteen: String,

    /// Day to show (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}

pub async fn run(args: &MealsArgs, client: Client, format: &OutputFormat) -> Result<()> {
    let canteen_id = validation::validate_canteen_id(&args.canteen)?;
    let date = match &args.date {
        Some(date) => validation::validate_date(date)?,
        None => Local::now().date_naive(),
    };

    let catalog = Catalog::new(ApiSource::new(client));
    let listing = with_spinner("Fetching meals", catalog.list_meals(canteen_id, date)).await?;

    print_meal_listing(&listing, format)
}
