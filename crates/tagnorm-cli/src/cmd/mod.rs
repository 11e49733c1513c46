// crates/tagnorm-cli/src/cmd/mod.rs

pub mod audit;
pub mod compare;
pub mod normalize;
pub mod profile;
pub mod rules;
