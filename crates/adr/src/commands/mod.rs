pub mod init;
pub mod path;
