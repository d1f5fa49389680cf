pub mod check;
mod command_result;
pub mod extract;
pub mod helper;
pub mod init;
pub mod update;

pub use command_result::*;
