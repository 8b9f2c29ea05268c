//! Keyboard/window input handling

use crate::sim::InputSnapshot;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Map a key name as reported by common windowing libraries
    pub fn from_name(name: &str) -> Self {
        match name {
            "Left" | "ArrowLeft" | "a" | "A" => Key::Left,
            "Right" | "ArrowRight" | "d" | "D" => Key::Right,
            "Space" | " " => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Raw events forwarded by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyPressed(Key),
    KeyReleased(Key),
    /// Window close button
    Closed,
}

/// Tracks held keys and one-shot presses between snapshots
#[derive(Debug, Clone, Default)]
pub struct InputCollector {
    left_held: bool,
    right_held: bool,
    launch: bool,
    quit: bool,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyPressed(Key::Left) => self.left_held = true,
            InputEvent::KeyPressed(Key::Right) => self.right_held = true,
            InputEvent::KeyPressed(Key::Space) => self.launch = true,
            InputEvent::KeyPressed(Key::Escape) | InputEvent::Closed => self.quit = true,
            InputEvent::KeyReleased(Key::Left) => self.left_held = false,
            InputEvent::KeyReleased(Key::Right) => self.right_held = false,
            InputEvent::KeyPressed(_) | InputEvent::KeyReleased(_) => {}
        }
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        for event in events {
            self.handle(event);
        }
    }

    /// Current input state. One-shot presses are cleared; held keys persist.
    pub fn snapshot(&mut self) -> InputSnapshot {
        let snapshot = InputSnapshot {
            move_left_held: self.left_held,
            move_right_held: self.right_held,
            launch_pressed: self.launch,
            quit_requested: self.quit,
        };
        self.launch = false;
        self.quit = false;
        snapshot
    }
}
