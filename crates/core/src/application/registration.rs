//! Registration dialog shell
//!
//! Visibility only. Nothing here registers anyone, and the waitlist never
//! consults it.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistrationDialog {
    visible: bool,
}

impl RegistrationDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
