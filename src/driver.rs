use serde::{Deserialize, Serialize};

// Drivers are listed on their own; nothing ties a driver to a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Driver {
    pub name: String,
    pub mobile_number: String,
    pub license_number: String,
    pub license_issue_date: String,
    pub license_expiry_date: String,
    pub aadhar_number: String,
    pub blood_group: String,
    pub police_verified: bool,
    pub address: String,
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Driver {}", self.name)
    }
}
