use dotenvy::dotenv;
use lazy_static::lazy_static;
use std::env as std_env;
use std::str::FromStr;

lazy_static! {
    pub static ref LEAVE_PAGE_SIZE: u32 =
        load_or_default(env::LEAVE_PAGE_SIZE_ENV_VAR, DEFAULT_LEAVE_PAGE_SIZE);
    pub static ref UPCOMING_MAX_DAYS: u32 =
        load_or_default(env::UPCOMING_MAX_DAYS_ENV_VAR, DEFAULT_UPCOMING_MAX_DAYS);
    pub static ref UPCOMING_MAX_RESULTS: usize = load_or_default(
        env::UPCOMING_MAX_RESULTS_ENV_VAR,
        DEFAULT_UPCOMING_MAX_RESULTS
    );
}

fn load_env() {
    dotenv().ok();
}

fn load_or_default<T: FromStr>(variable_name: &str, default_value: T) -> T {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                tracing::warn!(
                    "{} is not valid, using the default",
                    variable_name
                );
                default_value
            }
        },
        Err(_) => default_value,
    }
}

pub mod env {
    pub const LEAVE_PAGE_SIZE_ENV_VAR: &str = "LEAVE_PAGE_SIZE";
    pub const UPCOMING_MAX_DAYS_ENV_VAR: &str = "UPCOMING_MAX_DAYS";
    pub const UPCOMING_MAX_RESULTS_ENV_VAR: &str = "UPCOMING_MAX_RESULTS";
}

pub const DEFAULT_LEAVE_PAGE_SIZE: u32 = 100;
pub const DEFAULT_UPCOMING_MAX_DAYS: u32 = 5;
pub const DEFAULT_UPCOMING_MAX_RESULTS: usize = 7;
pub const DEFAULT_LOG_FILTER: &str = "info";
