pub mod aggregator;
pub mod gateway;
pub mod reporter;
pub mod resolver;
pub mod worker;
