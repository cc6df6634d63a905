//! Options for group conversion

/// Options for group conversion
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Record exact group order and plain-group class names in the design
    /// font's user data so a later design to build conversion replays them
    pub preserve_round_trip: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preserve_round_trip(mut self, preserve: bool) -> Self {
        self.preserve_round_trip = preserve;
        self
    }
}
