//! Input events and per-tick key state.

use std::collections::HashSet;

/// The keys the core understands. The shell maps physical keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Restart,
    Quit,
}

#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

/// A queue of input events.
/// The shell writes events into the queue; the runner drains them each frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Key state sampled once per tick: which keys are held, and which went
/// down since the previous tick (edge detection for restart/confirm).
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                self.held.insert(key);
                self.pressed.insert(key);
            }
            InputEvent::KeyUp(key) => {
                self.held.remove(&key);
            }
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// Clear edge state once a tick has consumed it.
    pub fn end_tick(&mut self) {
        self.pressed.clear();
    }
}
