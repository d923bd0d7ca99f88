use crate::choice::{RouteChoice, VehicleChoice};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Student {
    pub name: String,
    pub vehicle_choice: VehicleChoice,
    pub route_choice: RouteChoice,
}

impl Student {
    /// Builds a student from raw codes. Codes outside the known range resolve
    /// to Vehicle 1 / Route 1.
    pub fn new(name: impl Into<String>, vehicle_code: i64, route_code: i64) -> Student {
        Student {
            name: name.into(),
            vehicle_choice: VehicleChoice::from_code(vehicle_code),
            route_choice: RouteChoice::from_code(route_code),
        }
    }

    pub fn with_choices(
        name: impl Into<String>,
        vehicle_choice: VehicleChoice,
        route_choice: RouteChoice,
    ) -> Student {
        Student {
            name: name.into(),
            vehicle_choice,
            route_choice,
        }
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Student {}", self.name)
    }
}
