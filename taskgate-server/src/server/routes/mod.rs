pub mod agent;
pub mod meta;
