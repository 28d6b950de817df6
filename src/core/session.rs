//! Ephemeral per-process session state for the self-service caller role.

/// The identity a self-service caller acts as: both fields are set and
/// cleared together, so a half-logged-in state is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub vehicle: String,
}

#[derive(Debug, Default)]
pub struct Session {
    current: Option<Identity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, user: &str, vehicle: &str) {
        self.current = Some(Identity {
            user: user.to_string(),
            vehicle: vehicle.to_string(),
        });
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }
}
