pub const VEHICLE_CHOICE_COUNT: u32 = 2;
pub const ROUTE_CHOICE_COUNT: u32 = 8;
pub const MAX_INPUT_ATTEMPTS: usize = 3;
pub const DEFAULT_LOG_FILTER: &str = "warn";
pub const SEED_FLEET: bool = option_env!("NO_SEED_FLEET").is_none();
