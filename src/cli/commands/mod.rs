pub mod profile;
pub mod verify;
