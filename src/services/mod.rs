pub mod export;
pub mod harvester;
pub mod platform;
pub mod resolver;
pub mod transcript;
pub mod worker;
