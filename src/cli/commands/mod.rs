pub mod add_key;
pub mod check;
mod command_result;
pub mod fix;
pub mod helper;
pub mod init;
pub mod keys;
pub mod show;

pub use command_result::*;
