use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Route {
    pub route_number: String,
    pub start_location: String,
    pub end_location: String,
    // Kept in the order the stops were given
    pub pickup_points: Vec<PickupPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PickupPoint {
    pub name: String,
    pub pickup_time: String,
    pub drop_time: String,
    pub stop_number: u32,
}

impl Route {
    pub fn new(
        route_number: impl Into<String>,
        start_location: impl Into<String>,
        end_location: impl Into<String>,
        pickup_points: Vec<PickupPoint>,
    ) -> Route {
        Route {
            route_number: route_number.into(),
            start_location: start_location.into(),
            end_location: end_location.into(),
            pickup_points,
        }
    }
}

impl PickupPoint {
    pub fn new(
        name: impl Into<String>,
        pickup_time: impl Into<String>,
        drop_time: impl Into<String>,
        stop_number: u32,
    ) -> PickupPoint {
        PickupPoint {
            name: name.into(),
            pickup_time: pickup_time.into(),
            drop_time: drop_time.into(),
            stop_number,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Route {} ({} to {})",
            self.route_number, self.start_location, self.end_location
        )
    }
}
