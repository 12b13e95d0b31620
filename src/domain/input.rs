// Held-key record and single-shot fire request for the local player.

/// Keys the simulation reacts to. Anything else is ignored by the input adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Forward,
    Backward,
    Left,
    Right,
    Sprint,
}

impl KeyCode {
    /// Maps a DOM-style key code (`KeyW`, `ShiftLeft`, ...) to a simulation key.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyW" => Some(Self::Forward),
            "KeyS" => Some(Self::Backward),
            "KeyA" => Some(Self::Left),
            "KeyD" => Some(Self::Right),
            "ShiftLeft" => Some(Self::Sprint),
            _ => None,
        }
    }
}

/// Read-only view of the input consumed by one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub fire: bool,
}

#[derive(Debug, Default)]
pub struct InputState {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    sprint: bool,

    // Edge-triggered: set by a fresh trigger press, cleared when a tick consumes it.
    fire_requested: bool,
    // Debounce: a held trigger does not re-arm until released.
    trigger_held: bool,
    // Shots only register while the pointer is captured.
    pointer_locked: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level-triggered movement flags; they persist while the key is held.
    pub fn set_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::Forward => self.forward = pressed,
            KeyCode::Backward => self.backward = pressed,
            KeyCode::Left => self.left = pressed,
            KeyCode::Right => self.right = pressed,
            KeyCode::Sprint => self.sprint = pressed,
        }
    }

    pub fn press_trigger(&mut self) {
        if self.trigger_held {
            return;
        }
        self.trigger_held = true;
        if self.pointer_locked {
            self.fire_requested = true;
        }
    }

    pub fn release_trigger(&mut self) {
        self.trigger_held = false;
    }

    pub fn set_pointer_locked(&mut self, locked: bool) {
        self.pointer_locked = locked;
        if !locked {
            // Drop a pending shot when the pointer is released before the next tick.
            self.fire_requested = false;
        }
    }

    pub fn is_pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    /// Returns the current flags and consumes any pending fire request.
    pub fn take_snapshot(&mut self) -> InputSnapshot {
        let fire = std::mem::take(&mut self.fire_requested);
        InputSnapshot {
            forward: self.forward,
            backward: self.backward,
            left: self.left,
            right: self.right,
            sprint: self.sprint,
            fire,
        }
    }
}
