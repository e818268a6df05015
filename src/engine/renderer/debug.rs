// Debug overlay switch

/// Controls the diagnostic markers entities draw on top of their sprites
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugOverlay {
    enabled: bool,
}

impl DebugOverlay {
    /// Check if the overlay is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
        log::info!(
            "Debug overlay {}",
            if self.enabled { "enabled" } else { "disabled" }
        );
    }
}
