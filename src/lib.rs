pub mod commands;
pub mod error;
pub mod parser;
pub mod rope;
pub mod simulator;

pub use error::{Error, InputError};
pub use rope::{Command, Point, Rope, KNOTS};
pub use simulator::Simulator;
