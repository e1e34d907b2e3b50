//! The interactive menu: pick a canteen and a day, then browse meals.
//!
//! Selection state lives in a [`Session`] owned by the loop. A failing action
//! is reported and the loop carries on.

use anyhow::Result;
use chrono::Local;
use dialoguer::{Input, Select};
use openmensa_lib::openmensa_api::Client;
use openmensa_lib::validation;
use openmensa_lib::{ApiSource, Catalog, ClientConfig, Session};

use super::{base_query, with_spinner};
use crate::output::{print_canteens, print_meal_listing, OutputFormat};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSelection {
    ShowCanteens,
    SetCanteen,
    ShowMeals,
    SetDate,
    Quit,
}

impl MenuSelection {
    pub const ITEMS: [&'static str; 5] = [
        "Show canteens",
        "Set canteen",
        "Show meals",
        "Set date",
        "Quit",
    ];

    /// Maps a menu index to its action; anything out of range quits.
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => MenuSelection::ShowCanteens,
            1 => MenuSelection::SetCanteen,
            2 => MenuSelection::ShowMeals,
            3 => MenuSelection::SetDate,
            _ => MenuSelection::Quit,
        }
    }
}

/// One-line status shown above the menu.
pub fn session_summary(session: &Session) -> String {
    let canteen = match session.canteen() {
        Some(id) => id.to_string(),
        None => "none".to_string(),
    };
    format!(
        "Canteen: {} | Date: {}",
        canteen,
        validation::format_api_date(session.date())
    )
}

pub async fn run(client: Client, config: &ClientConfig, format: &OutputFormat) -> Result<()> {
    let catalog = Catalog::new(ApiSource::with_query(client, base_query(config)));
    let mut session = Session::new(Local::now().date_naive());

    loop {
        let index = Select::new()
            .with_prompt(session_summary(&session))
            .items(&MenuSelection::ITEMS[..])
            .default(0)
            .interact()?;

        let outcome = match MenuSelection::from_index(index) {
            MenuSelection::ShowCanteens => show_canteens(&catalog, format).await,
            MenuSelection::SetCanteen => read_canteen(&mut session),
            MenuSelection::ShowMeals => show_meals(&catalog, &session, format).await,
            MenuSelection::SetDate => read_date(&mut session),
            MenuSelection::Quit => return Ok(()),
        };

        if let Err(e) = outcome {
            tracing::debug!("Menu action failed: {:?}", e);
            eprintln!("Error: {:#}", e);
        }
    }
}

async fn show_canteens(catalog: &Catalog<ApiSource>, format: &OutputFormat) -> Result<()> {
    let canteens = with_spinner("Fetching canteens", catalog.list_all_canteens()).await?;
    print_canteens(&canteens, format)
}

async fn show_meals(
    catalog: &Catalog<ApiSource>,
    session: &Session,
    format: &OutputFormat,
) -> Result<()> {
    let listing = with_spinner("Fetching meals", catalog.list_meals_for_selection(session)).await?;
    print_meal_listing(&listing, format)
}

fn read_canteen(session: &mut Session) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("Enter canteen id")
        .validate_with(|input: &String| -> Result<(), String> {
            validation::validate_canteen_id(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    session.select_canteen_input(&input)?;
    Ok(())
}

fn read_date(session: &mut Session) -> Result<()> {
    let input: String = Input::new()
        .with_prompt("Enter date (YYYY-MM-DD)")
        .default(validation::format_api_date(session.date()))
        .validate_with(|input: &String| -> Result<(), String> {
            validation::validate_date(input)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    session.set_date_input(&input)?;
    Ok(())
}
