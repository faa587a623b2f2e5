//! Input Bindings Module
//!
//! Provides a flexible input binding system that maps physical keys and mouse
//! buttons to logical actions, allowing for future remapping support.

use std::collections::{HashMap, HashSet};

use super::KeyCode;

/// Mouse buttons that can participate in bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A physical input source: either a keyboard key or a mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Key(KeyCode),
    Mouse(MouseButton),
}

/// Logical input actions that can be bound to physical sources.
///
/// These actions represent high-level game inputs independent of their physical mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Fire the weapon (default: left mouse button)
    Fire,
    /// Aim down sights while held (default: right mouse button)
    Aim,
    /// Open menu / cancel (default: Escape)
    Escape,
}

/// Maps physical input sources to logical actions, supporting customizable bindings.
///
/// This struct allows the game to use logical actions in game code while
/// maintaining the ability to remap inputs without changing game logic.
#[derive(Debug, Clone)]
pub struct ActionBindings {
    /// Map from physical source to logical action
    source_to_action: HashMap<InputSource, InputAction>,
    /// Map from logical action to physical source (for reverse lookup and display)
    action_to_source: HashMap<InputAction, InputSource>,
}

impl Default for ActionBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionBindings {
    /// Create a new ActionBindings instance with default mappings.
    ///
    /// Default bindings:
    /// - W = MoveForward
    /// - S = MoveBack
    /// - A = MoveLeft
    /// - D = MoveRight
    /// - Space = Jump
    /// - Mouse Left = Fire
    /// - Mouse Right = Aim
    /// - Escape = Escape
    pub fn new() -> Self {
        let mut bindings = Self {
            source_to_action: HashMap::new(),
            action_to_source: HashMap::new(),
        };

        // Set up default bindings
        bindings.bind(InputSource::Key(KeyCode::W), InputAction::MoveForward);
        bindings.bind(InputSource::Key(KeyCode::S), InputAction::MoveBack);
        bindings.bind(InputSource::Key(KeyCode::A), InputAction::MoveLeft);
        bindings.bind(InputSource::Key(KeyCode::D), InputAction::MoveRight);
        bindings.bind(InputSource::Key(KeyCode::Space), InputAction::Jump);
        bindings.bind(InputSource::Mouse(MouseButton::Left), InputAction::Fire);
        bindings.bind(InputSource::Mouse(MouseButton::Right), InputAction::Aim);
        bindings.bind(InputSource::Key(KeyCode::Escape), InputAction::Escape);

        bindings
    }

    /// Bind a physical source to a logical action.
    ///
    /// If the source was previously bound to another action, that binding is removed.
    /// If the action was previously bound to another source, that binding is also removed.
    pub fn bind(&mut self, source: InputSource, action: InputAction) {
        // Remove old binding for this source (if any)
        if let Some(old_action) = self.source_to_action.remove(&source) {
            self.action_to_source.remove(&old_action);
        }

        // Remove old binding for this action (if any)
        if let Some(old_source) = self.action_to_source.remove(&action) {
            self.source_to_action.remove(&old_source);
        }

        // Create new binding
        self.source_to_action.insert(source, action);
        self.action_to_source.insert(action, source);
    }

    /// Remove the binding for a specific source.
    pub fn unbind_source(&mut self, source: InputSource) {
        if let Some(action) = self.source_to_action.remove(&source) {
            self.action_to_source.remove(&action);
        }
    }

    /// Remove the binding for a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(source) = self.action_to_source.remove(&action) {
            self.source_to_action.remove(&source);
        }
    }

    /// Get the action bound to a physical source, if any.
    pub fn get_action(&self, source: InputSource) -> Option<InputAction> {
        self.source_to_action.get(&source).copied()
    }

    /// Get the source bound to a logical action, if any.
    pub fn get_source(&self, action: InputAction) -> Option<InputSource> {
        self.action_to_source.get(&action).copied()
    }

    /// Check if a specific action is currently pressed, given a set of pressed sources.
    ///
    /// This method looks up which source is bound to the given action and checks
    /// if that source is in the pressed set.
    pub fn is_action_pressed(
        &self,
        action: InputAction,
        pressed: &HashSet<InputSource>,
    ) -> bool {
        if let Some(source) = self.action_to_source.get(&action) {
            pressed.contains(source)
        } else {
            false
        }
    }

    /// Get all current bindings as source-action pairs.
    pub fn all_bindings(&self) -> impl Iterator<Item = (InputSource, InputAction)> + '_ {
        self.source_to_action.iter().map(|(&s, &a)| (s, a))
    }
}
