//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{probe_contacts, update_one_way_collision};
pub(crate) use input::read_input;
pub(crate) use movement::{apply_gravity, sync_from_physics, tick_controllers, write_to_physics};
