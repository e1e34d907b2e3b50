//! Meal listings for a canteen and day.

use serde::{Deserialize, Serialize};

/// One meal on a canteen's menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub id: i64,

    pub name: String,

    /// Menu section, e.g. "Hauptgericht" or "Beilagen".
    pub category: Option<String>,

    #[serde(default)]
    pub prices: Prices,

    /// Free-form annotations such as allergens or "vegan".
    #[serde(default)]
    pub notes: Vec<String>,
}

/// Price per customer group in euros. Groups the canteen does not serve are `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Prices {
    pub students: Option<f64>,
    pub employees: Option<f64>,
    pub pupils: Option<f64>,
    pub others: Option<f64>,
}
