/// Capability markers and the operation traits they unlock
pub mod resource;
