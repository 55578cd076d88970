pub mod config;
pub mod policy;

pub use config::CooldownConfig;
pub use policy::{evaluate, CooldownDecision};
