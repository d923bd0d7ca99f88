use log::{error, warn};
use school_transport::consts::{DEFAULT_LOG_FILTER, SEED_FLEET};
use school_transport::data;
use school_transport::input::StudentPrompter;
use school_transport::TransportPlan;
use std::io;

fn build_plan() -> TransportPlan {
    if !SEED_FLEET {
        return TransportPlan::new();
    }

    match data::default_seed_data() {
        Ok(seed) => TransportPlan::from_seed(seed),
        Err(err) => {
            error!("Could not load the built-in fleet: {err}");
            TransportPlan::new()
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let mut transport_plan = build_plan();

    let stdin = io::stdin();
    let mut prompter = StudentPrompter::new(stdin.lock(), io::stdout());
    if let Err(err) = prompter.collect_students(&mut transport_plan) {
        warn!("Stopped reading students: {err}");
    }
    drop(prompter);

    // Exit status stays 0 whatever happens to stdout
    if let Err(err) = transport_plan.display_transport_plan(&mut io::stdout().lock()) {
        error!("Could not print the transport plan: {err}");
    }
}
