use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Vehicle {
    pub vehicle_type: String,
    pub manufacturer: String,
    pub route_number: String,
    pub registration_number: String,
    pub owner_name: String,
    pub owner_phone_number: String,
    pub owner_address: String,
    pub fuel_type: String,
    pub seating_capacity: u32,
    pub insurance: Insurance,
    pub additional_features: AdditionalFeatures,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Insurance {
    pub company_name: String,
    pub policy_number: String,
    // e.g. "Third-Party", "Zero Depreciation"
    pub coverage: String,
    pub amount_paid: f64,
    pub issue_date: String,
    pub expiry_date: String,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdditionalFeatures {
    pub ac: bool,
    pub radio: bool,
    pub camera: bool,
    pub fire_extinguisher: bool,
    pub first_aid_kit: bool,
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.vehicle_type, self.registration_number)
    }
}
