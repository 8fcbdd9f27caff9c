//! Held-key tracking with delayed auto shift for terminal environments.
//!
//! Terminals that report key release events give exact held state. Others
//! only repeat press events while a key is down, so a key also counts as
//! released once no press for it has arrived within a timeout.
//!
//! Left, right and rotate act once on the press edge and then only after the
//! key has been held for the DAS delay; the engine's input cooldown paces
//! the repeats from there. Soft drop is a mode and acts for as long as the
//! key is held.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::source::InputSource;
use crate::types::{FrameInput, Key};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained held state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Must stay above the release timeout so a tap never reaches auto-repeat.
const DEFAULT_DAS_MS: u32 = 170;

#[derive(Debug, Clone, Copy, Default)]
struct KeySlot {
    held: bool,
    /// Pressed since the last `update`
    pending: bool,
    /// The press edge falls in the current frame
    edge: bool,
    /// Milliseconds since the last press event
    since_press_ms: u32,
    /// Milliseconds held since the press edge
    held_ms: u32,
}

/// Tracks which engine keys are currently held.
#[derive(Debug, Clone)]
pub struct KeyboardState {
    slots: [KeySlot; 4],
    key_release_timeout_ms: u32,
    das_ms: u32,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self {
            slots: [KeySlot::default(); 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            das_ms: DEFAULT_DAS_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn with_das_ms(mut self, das_ms: u32) -> Self {
        self.das_ms = das_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn das_ms(&self) -> u32 {
        self.das_ms
    }

    fn slot(key: Key) -> usize {
        match key {
            Key::Left => 0,
            Key::Right => 1,
            Key::Rotate => 2,
            Key::SoftDrop => 3,
        }
    }

    /// Record a press. A press of a key already held only refreshes it.
    pub fn press(&mut self, key: Key) {
        let slot = &mut self.slots[Self::slot(key)];
        if !slot.held {
            *slot = KeySlot {
                held: true,
                pending: true,
                ..KeySlot::default()
            };
        }
        slot.since_press_ms = 0;
    }

    /// A tap released before the next `update` still acts once.
    pub fn release(&mut self, key: Key) {
        let slot = &mut self.slots[Self::slot(key)];
        slot.held = false;
        slot.held_ms = 0;
    }

    pub fn release_all(&mut self) {
        self.slots = [KeySlot::default(); 4];
    }

    /// Raw held state, ignoring the DAS delay.
    pub fn is_held(&self, key: Key) -> bool {
        self.slots[Self::slot(key)].held
    }

    /// Feed a terminal key event. Returns whether it mapped to an engine key.
    pub fn handle_key_event(&mut self, event: KeyEvent) -> bool {
        let Some(key) = map_key(event.code) else {
            return false;
        };
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(key),
            KeyEventKind::Release => self.release(key),
        }
        true
    }

    /// Advance to the next frame; call once per frame before sampling.
    ///
    /// Keys without a recent press event are released.
    pub fn update(&mut self, elapsed_ms: u32) {
        for slot in &mut self.slots {
            slot.edge = slot.pending;
            slot.pending = false;
            if !slot.held {
                continue;
            }
            if !slot.edge {
                slot.held_ms = slot.held_ms.saturating_add(elapsed_ms);
            }
            slot.since_press_ms = slot.since_press_ms.saturating_add(elapsed_ms);
            if slot.since_press_ms > self.key_release_timeout_ms {
                slot.held = false;
                slot.held_ms = 0;
            }
        }
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for KeyboardState {
    fn is_active(&self, key: Key) -> bool {
        let slot = &self.slots[Self::slot(key)];
        match key {
            Key::SoftDrop => slot.edge || slot.held,
            Key::Left | Key::Right | Key::Rotate => {
                slot.edge || (slot.held && slot.held_ms >= self.das_ms)
            }
        }
    }
}

impl From<&KeyboardState> for FrameInput {
    fn from(state: &KeyboardState) -> Self {
        state.frame_input()
    }
}
