pub mod cli;
pub mod descriptor;
pub mod formatters;
pub mod languages;
pub mod naming;
pub mod scaffold;
pub mod types;
