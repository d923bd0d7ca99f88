use crate::driver::Driver;
use crate::route::{PickupPoint, Route};
use crate::student::Student;
use crate::vehicle::Vehicle;
use std::fmt::{Display, Formatter};

pub enum ReportLine<'a> {
    Heading(&'static str),
    Vehicle(VehicleInfo<'a>),
    Driver(DriverInfo<'a>),
    Route(RouteInfo<'a>),
    PickupPoint(PickupPointInfo<'a>),
    Student(StudentInfo<'a>),
}

impl std::fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        match self {
            ReportLine::Heading(heading) => write!(f, "{heading}"),
            ReportLine::Vehicle(info) => write!(f, "{info}"),
            ReportLine::Driver(info) => write!(f, "{info}"),
            ReportLine::Route(info) => write!(f, "{info}"),
            ReportLine::PickupPoint(info) => write!(f, "{info}"),
            ReportLine::Student(info) => write!(f, "{info}"),
        }
    }
}

pub struct VehicleInfo<'a> {
    vehicle: &'a Vehicle,
}

pub struct DriverInfo<'a> {
    driver: &'a Driver,
}

pub struct RouteInfo<'a> {
    route: &'a Route,
}

pub struct PickupPointInfo<'a> {
    pickup_point: &'a PickupPoint,
}

pub struct StudentInfo<'a> {
    student: &'a Student,
}

impl VehicleInfo<'_> {
    pub fn new(vehicle: &Vehicle) -> VehicleInfo<'_> {
        VehicleInfo { vehicle }
    }
}

impl Display for VehicleInfo<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "  Vehicle Type: {}, Owner: {}, Route: {}",
            self.vehicle.vehicle_type, self.vehicle.owner_name, self.vehicle.route_number
        )
    }
}

impl DriverInfo<'_> {
    pub fn new(driver: &Driver) -> DriverInfo<'_> {
        DriverInfo { driver }
    }
}

impl Display for DriverInfo<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "  Driver Name: {}, Mobile: {}, License: {}",
            self.driver.name, self.driver.mobile_number, self.driver.license_number
        )
    }
}

impl RouteInfo<'_> {
    pub fn new(route: &Route) -> RouteInfo<'_> {
        RouteInfo { route }
    }
}

impl Display for RouteInfo<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "  Route Number: {}, Start: {}, End: {}",
            self.route.route_number, self.route.start_location, self.route.end_location
        )
    }
}

impl PickupPointInfo<'_> {
    pub fn new(pickup_point: &PickupPoint) -> PickupPointInfo<'_> {
        PickupPointInfo { pickup_point }
    }
}

impl Display for PickupPointInfo<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "    Pickup Point: {}, Stop: {}, Pickup Time: {}, Drop Time: {}",
            self.pickup_point.name,
            self.pickup_point.stop_number,
            self.pickup_point.pickup_time,
            self.pickup_point.drop_time
        )
    }
}

impl StudentInfo<'_> {
    pub fn new(student: &Student) -> StudentInfo<'_> {
        StudentInfo { student }
    }
}

impl Display for StudentInfo<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "  Student Name: {}, Chose: {}, {}",
            self.student.name, self.student.vehicle_choice, self.student.route_choice
        )
    }
}
