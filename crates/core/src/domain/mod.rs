pub mod profile;
pub mod recommendation;
pub mod service_cost;
