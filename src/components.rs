pub mod dashboard;
pub mod forecast;
pub mod layout;
pub mod metrics;
