pub mod clock;
pub mod configuration;
pub mod controller;
pub mod domain;
pub mod page;
pub mod routes;
pub mod startup;
pub mod telemetry;
mod utils;
pub mod validators;
