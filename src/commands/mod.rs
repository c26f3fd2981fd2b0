pub mod init;
pub mod risk;
pub mod score;
