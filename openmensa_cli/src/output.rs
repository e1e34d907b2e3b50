use anyhow::Result;
use openmensa_lib::types::{Canteen, Meal};
use openmensa_lib::MealListing;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Maps the `--output` value; anything unrecognised falls back to a table.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct CanteenRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    #[serde(rename = "City")]
    city: String,
    #[tabled(rename = "Address")]
    #[serde(rename = "Address")]
    address: String,
}

#[derive(Tabled, Serialize)]
struct MealRow {
    #[tabled(rename = "Category")]
    #[serde(rename = "Category")]
    category: String,
    #[tabled(rename = "Meal")]
    #[serde(rename = "Meal")]
    name: String,
    #[tabled(rename = "Students")]
    #[serde(rename = "Students")]
    students: String,
    #[tabled(rename = "Employees")]
    #[serde(rename = "Employees")]
    employees: String,
    #[tabled(rename = "Pupils")]
    #[serde(rename = "Pupils")]
    pupils: String,
    #[tabled(rename = "Others")]
    #[serde(rename = "Others")]
    others: String,
    #[tabled(rename = "Notes")]
    #[serde(rename = "Notes")]
    notes: String,
}

// -- Row builders --

fn build_canteen_rows(canteens: &[Canteen]) -> Vec<CanteenRow> {
    canteens
        .iter()
        .map(|c| CanteenRow {
            id: c.id,
            name: c.name.clone(),
            city: c.city.clone().unwrap_or_default(),
            address: c.address.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_meal_rows(meals: &[Meal]) -> Vec<MealRow> {
    meals
        .iter()
        .map(|m| MealRow {
            category: m.category.clone().unwrap_or_default(),
            name: m.name.clone(),
            students: format_price(m.prices.students),
            employees: format_price(m.prices.employees),
            pupils: format_price(m.prices.pupils),
            others: format_price(m.prices.others),
            notes: m.notes.join(", "),
        })
        .collect()
}

fn render_table<T: Tabled>(rows: Vec<T>, format: &OutputFormat) -> String {
    let mut table = Table::new(rows);
    if *format == OutputFormat::Markdown {
        table.with(Style::markdown());
    }
    table.to_string()
}

fn write_csv<T: Serialize>(rows: Vec<T>) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- Canteens --

pub fn print_canteens(canteens: &[Canteen], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table | OutputFormat::Markdown => {
            println!("{}", render_table(build_canteen_rows(canteens), format))
        }
        OutputFormat::Json => print_json(&canteens),
        OutputFormat::Csv => write_csv(build_canteen_rows(canteens))?,
    }
    Ok(())
}

// -- Meals --

/// Where a line of user-facing text goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// How a meal listing is shown for a given format.
#[derive(Debug, PartialEq)]
enum ListingOutput<'a> {
    /// The whole listing as one JSON document, notice included.
    Json,
    Message(Stream, &'static str),
    Rows(&'a [Meal]),
}

const NO_MEALS: &str = "No meals listed for this day.";

/// Table output shows notices inline on stdout; machine-readable formats keep
/// stdout clean and use stderr.
fn notice_stream(format: &OutputFormat) -> Stream {
    match format {
        OutputFormat::Table => Stream::Stdout,
        _ => Stream::Stderr,
    }
}

fn route_meal_listing<'a>(listing: &'a MealListing, format: &OutputFormat) -> ListingOutput<'a> {
    if *format == OutputFormat::Json {
        return ListingOutput::Json;
    }
    if let Some(notice) = listing.notice {
        return ListingOutput::Message(notice_stream(format), notice.message());
    }
    if listing.meals.is_empty() {
        return ListingOutput::Message(Stream::Stderr, NO_MEALS);
    }
    ListingOutput::Rows(&listing.meals)
}

fn emit(stream: Stream, text: &str) {
    match stream {
        Stream::Stdout => println!("{}", text),
        Stream::Stderr => eprintln!("{}", text),
    }
}

/// Prints the meals of a listing, or its notice when there are none to show.
///
/// JSON output carries the notice inside the document; the other formats
/// print it as a line of its own.
pub fn print_meal_listing(listing: &MealListing, format: &OutputFormat) -> Result<()> {
    match route_meal_listing(listing, format) {
        ListingOutput::Json => print_json(listing),
        ListingOutput::Message(stream, text) => emit(stream, text),
        ListingOutput::Rows(meals) => match format {
            OutputFormat::Csv => write_csv(build_meal_rows(meals))?,
            _ => println!("{}", render_table(build_meal_rows(meals), format)),
        },
    }
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("€{:.2}", p),
        None => "-".to_string(),
    }
}
