pub mod config_io;
pub mod intake;
pub mod seed_io;
