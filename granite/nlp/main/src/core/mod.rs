pub mod granite;
pub mod hub_source;
pub mod pipeline;
