//! Library side of the survey dashboard CLI: logging setup and the loaded
//! session shared by every subcommand.

pub mod logging;
pub mod session;
