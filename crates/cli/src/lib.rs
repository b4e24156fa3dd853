// calcsales CLI - shared pieces for the binary and its tests

pub mod messages;
pub mod settings;
