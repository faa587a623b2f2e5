//! Character Rig Module
//!
//! Named attachment points on the character. The engine carries no skeletal
//! animation; sockets are fixed offsets in character-local space that rotate
//! with the body yaw, which is all the fire path needs to place the muzzle.
//!
//! Local space is +X right, +Y up, +Z forward (in front of the character).

use std::collections::HashMap;

use glam::Vec3;

/// Socket the weapon muzzle sits on. A rig without it cannot fire.
pub const BARREL_SOCKET: &str = "BarrelSocket";

/// World-space placement of a socket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocketTransform {
    /// Socket position in world space
    pub position: Vec3,
    /// Direction the socket points (the body's forward)
    pub forward: Vec3,
}

/// Named socket offsets on the character body.
#[derive(Debug, Clone)]
pub struct CharacterRig {
    /// Local-space offset per socket name
    sockets: HashMap<String, Vec3>,
}

impl Default for CharacterRig {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRig {
    /// Create a rig with the standard rifle muzzle socket.
    ///
    /// The barrel sits at chest height, slightly right of center, ahead of
    /// the body.
    pub fn new() -> Self {
        let mut rig = Self::empty();
        rig.add_socket(BARREL_SOCKET, Vec3::new(15.0, 135.0, 80.0));
        rig
    }

    /// Create a rig with no sockets at all.
    pub fn empty() -> Self {
        Self {
            sockets: HashMap::new(),
        }
    }

    /// Add or replace a socket at a character-local offset.
    pub fn add_socket(&mut self, name: &str, local_offset: Vec3) {
        self.sockets.insert(name.to_string(), local_offset);
    }

    /// Remove a socket. Returns `true` if it existed.
    pub fn remove_socket(&mut self, name: &str) -> bool {
        self.sockets.remove(name).is_some()
    }

    /// Whether the rig carries a socket by this name.
    pub fn has_socket(&self, name: &str) -> bool {
        self.sockets.contains_key(name)
    }

    /// Resolve a socket to world space for a body at `base_position` facing
    /// `facing_yaw`.
    ///
    /// Returns `None` when the socket does not exist; callers decide whether
    /// that aborts the operation (firing does).
    pub fn socket_transform(
        &self,
        name: &str,
        base_position: Vec3,
        facing_yaw: f32,
    ) -> Option<SocketTransform> {
        let local = *self.sockets.get(name)?;

        let forward = Vec3::new(facing_yaw.sin(), 0.0, -facing_yaw.cos());
        let right = Vec3::new(facing_yaw.cos(), 0.0, facing_yaw.sin());

        let position =
            base_position + right * local.x + Vec3::Y * local.y + forward * local.z;

        Some(SocketTransform { position, forward })
    }
}
