mod command_result;
pub mod context;
pub mod init;
pub mod render;
pub mod translate;

pub use command_result::*;
