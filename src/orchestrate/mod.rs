pub(crate) mod config;
pub(crate) mod effect;
pub(crate) mod orchestrator;
