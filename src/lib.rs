pub mod choice;
pub mod consts;
pub mod data;
pub mod display;
pub mod driver;
pub mod error;
pub mod input;
pub mod route;
pub mod student;
pub mod vehicle;

use data::SeedData;
use display::{DriverInfo, PickupPointInfo, ReportLine, RouteInfo, StudentInfo, VehicleInfo};
use log::{debug, info};
use std::io::Write;

pub use choice::{RouteChoice, VehicleChoice};
pub use driver::Driver;
pub use error::{PlanError, Result};
pub use route::{PickupPoint, Route};
pub use student::Student;
pub use vehicle::{AdditionalFeatures, Insurance, Vehicle};

/// Vehicles, drivers, routes and students of one school, each kept in the
/// order they were added. Records are only ever appended.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TransportPlan {
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
    routes: Vec<Route>,
    students: Vec<Student>,
}

impl TransportPlan {
    pub fn new() -> TransportPlan {
        TransportPlan::default()
    }

    pub fn from_seed(seed: SeedData) -> TransportPlan {
        let SeedData {
            vehicles,
            drivers,
            routes,
        } = seed;

        let mut plan = TransportPlan::new();
        vehicles.into_iter().for_each(|vehicle| plan.add_vehicle(vehicle));
        drivers.into_iter().for_each(|driver| plan.add_driver(driver));
        routes.into_iter().for_each(|route| plan.add_route(route));

        info!(
            "Seeded transport plan with {} vehicles, {} drivers and {} routes",
            plan.vehicles.len(),
            plan.drivers.len(),
            plan.routes.len()
        );
        plan
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) {
        debug!("Adding vehicle {vehicle}");
        self.vehicles.push(vehicle);
    }

    pub fn add_driver(&mut self, driver: Driver) {
        debug!("Adding {driver}");
        self.drivers.push(driver);
    }

    pub fn add_route(&mut self, route: Route) {
        debug!("Adding {route}");
        self.routes.push(route);
    }

    pub fn add_student(&mut self, student: Student) {
        debug!(
            "Adding {student} on {}, {}",
            student.vehicle_choice, student.route_choice
        );
        self.students.push(student);
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Every line of the report, in output order. Section headings are always
    /// present, even when a collection is empty.
    pub fn report_lines(&self) -> Vec<ReportLine<'_>> {
        let mut lines = vec![ReportLine::Heading("Transport Plan:")];

        lines.push(ReportLine::Heading("Vehicles:"));
        lines.extend(
            self.vehicles
                .iter()
                .map(|vehicle| ReportLine::Vehicle(VehicleInfo::new(vehicle))),
        );

        lines.push(ReportLine::Heading("Drivers:"));
        lines.extend(
            self.drivers
                .iter()
                .map(|driver| ReportLine::Driver(DriverInfo::new(driver))),
        );

        lines.push(ReportLine::Heading("Routes:"));
        for route in &self.routes {
            lines.push(ReportLine::Route(RouteInfo::new(route)));
            lines.extend(
                route
                    .pickup_points
                    .iter()
                    .map(|pickup_point| ReportLine::PickupPoint(PickupPointInfo::new(pickup_point))),
            );
        }

        lines.push(ReportLine::Heading("Students:"));
        lines.extend(
            self.students
                .iter()
                .map(|student| ReportLine::Student(StudentInfo::new(student))),
        );

        lines
    }

    pub fn display_transport_plan(&self, writer: &mut impl Write) -> Result<()> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }
}

impl std::fmt::Display for TransportPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.report_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
