use crate::consts::{ROUTE_CHOICE_COUNT, VEHICLE_CHOICE_COUNT};
use crate::error::{PlanError, Result};
use serde::{Deserialize, Serialize};

// Codes a student types to pick a vehicle or a route. They are labels only and
// do not index into the plan's collections.

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum VehicleChoice {
    #[default]
    Vehicle1,
    Vehicle2,
}

const VEHICLE_CHOICES: [VehicleChoice; VEHICLE_CHOICE_COUNT as usize] =
    [VehicleChoice::Vehicle1, VehicleChoice::Vehicle2];

impl VehicleChoice {
    pub fn try_from_code(code: i64) -> Result<VehicleChoice> {
        choice_from_table(&VEHICLE_CHOICES, code).ok_or(PlanError::InvalidChoice {
            field: "vehicle",
            code,
            max: VEHICLE_CHOICE_COUNT,
        })
    }

    /// Unknown codes fall back to `Vehicle1`.
    pub fn from_code(code: i64) -> VehicleChoice {
        VehicleChoice::try_from_code(code).unwrap_or_default()
    }

    pub fn code(self) -> i64 {
        match self {
            VehicleChoice::Vehicle1 => 1,
            VehicleChoice::Vehicle2 => 2,
        }
    }
}

impl std::fmt::Display for VehicleChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Vehicle {}", self.code())
    }
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RouteChoice {
    #[default]
    Route1,
    Route2,
    Route3,
    Route4,
    Route5,
    Route6,
    Route7,
    Route8,
}

const ROUTE_CHOICES: [RouteChoice; ROUTE_CHOICE_COUNT as usize] = [
    RouteChoice::Route1,
    RouteChoice::Route2,
    RouteChoice::Route3,
    RouteChoice::Route4,
    RouteChoice::Route5,
    RouteChoice::Route6,
    RouteChoice::Route7,
    RouteChoice::Route8,
];

impl RouteChoice {
    pub fn try_from_code(code: i64) -> Result<RouteChoice> {
        choice_from_table(&ROUTE_CHOICES, code).ok_or(PlanError::InvalidChoice {
            field: "route",
            code,
            max: ROUTE_CHOICE_COUNT,
        })
    }

    /// Unknown codes fall back to `Route1`.
    pub fn from_code(code: i64) -> RouteChoice {
        RouteChoice::try_from_code(code).unwrap_or_default()
    }

    pub fn code(self) -> i64 {
        // Variants are declared in code order
        self as i64 + 1
    }
}

impl std::fmt::Display for RouteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Route {}", self.code())
    }
}

fn choice_from_table<T: Copy>(table: &[T], code: i64) -> Option<T> {
    let index = usize::try_from(code.checked_sub(1)?).ok()?;
    table.get(index).copied()
}
