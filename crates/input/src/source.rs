//! The input capability consumed by the game loop.

use crate::types::{FrameInput, Key};

/// Something that can be asked which engine keys act this frame.
pub trait InputSource {
    fn is_active(&self, key: Key) -> bool;

    /// Sample every key into one frame's input
    fn frame_input(&self) -> FrameInput {
        let mut input = FrameInput::default();
        for key in Key::ALL {
            input.set(key, self.is_active(key));
        }
        input
    }
}

impl InputSource for FrameInput {
    fn is_active(&self, key: Key) -> bool {
        self.is_held(key)
    }

    fn frame_input(&self) -> FrameInput {
        *self
    }
}
