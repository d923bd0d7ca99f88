use crate::driver::Driver;
use crate::error::Result;
use crate::route::Route;
use crate::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

const DEFAULT_SEED_JSON: &str = include_str!("../data/seed_plan.json");

/// The fleet a plan starts with before any students are entered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SeedData {
    pub vehicles: Vec<Vehicle>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
    pub routes: Vec<Route>,
}

pub fn parse_seed_data(json: &str) -> Result<SeedData> {
    let data: SeedData = serde_json::from_str(json)?;
    Ok(data)
}

pub fn default_seed_data() -> Result<SeedData> {
    parse_seed_data(DEFAULT_SEED_JSON)
}
