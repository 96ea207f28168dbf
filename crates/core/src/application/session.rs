//! Waitlist Session - the state one front-end session owns
//!
//! Display layers translate user actions into [`Intent`]s and render
//! [`QueueView`]s; they never touch the engine directly.

use super::registration::RegistrationDialog;
use super::view::QueueView;
use super::waitlist::QueueEngine;
use crate::config::EngineConfig;
use crate::domain::QueueEntry;
use crate::error::{AppError, Result};
use crate::port::{IdProvider, TimeProvider};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// User-triggered action forwarded from the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Join,
    Leave,
    OpenRegistration,
    CloseRegistration,
}

impl FromStr for Intent {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "join" => Ok(Intent::Join),
            "leave" => Ok(Intent::Leave),
            "register" => Ok(Intent::OpenRegistration),
            "cancel" => Ok(Intent::CloseRegistration),
            other => Err(AppError::Validation(format!("unknown action '{other}'"))),
        }
    }
}

/// What applying an intent did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    Joined(QueueEntry),
    /// `None` when the waitlist was already empty
    Served(Option<QueueEntry>),
    DialogShown,
    DialogHidden,
}

pub struct WaitlistSession {
    engine: QueueEngine,
    dialog: RegistrationDialog,
}

impl WaitlistSession {
    pub fn new(
        config: &EngineConfig,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            engine: QueueEngine::new(config, id_provider, time_provider),
            dialog: RegistrationDialog::new(),
        }
    }

    /// Session wired from configuration alone (ID strategy + system clock)
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config,
            config.id_strategy.provider(),
            Arc::new(crate::port::SystemTimeProvider),
        )
    }

    pub fn apply(&mut self, intent: Intent) -> Result<IntentOutcome> {
        debug!(?intent, "Applying intent");

        let outcome = match intent {
            Intent::Join => IntentOutcome::Joined(self.engine.enqueue()?),
            Intent::Leave => IntentOutcome::Served(self.engine.dequeue_head()),
            Intent::OpenRegistration => {
                self.dialog.open();
                IntentOutcome::DialogShown
            }
            Intent::CloseRegistration => {
                self.dialog.close();
                IntentOutcome::DialogHidden
            }
        };

        Ok(outcome)
    }

    /// Render model at `now` (epoch ms)
    pub fn view(&self, now: i64) -> QueueView {
        QueueView::build(
            self.engine.entries(),
            self.engine.capacity(),
            self.dialog.is_visible(),
            now,
        )
    }

    /// Render model at the session clock's current time
    pub fn view_now(&self) -> QueueView {
        self.view(self.engine.now_millis())
    }

    pub fn engine(&self) -> &QueueEngine {
        &self.engine
    }

    pub fn registration(&self) -> &RegistrationDialog {
        &self.dialog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::port::SequentialIdProvider;

    struct MockTimeProvider {
        current_time: i64,
    }

    impl TimeProvider for MockTimeProvider {
        fn now_millis(&self) -> i64 {
            self.current_time
        }
    }

    fn session(capacity: usize) -> WaitlistSession {
        WaitlistSession::new(
            &EngineConfig {
                capacity,
                ..EngineConfig::default()
            },
            Arc::new(SequentialIdProvider::new()),
            Arc::new(MockTimeProvider {
                current_time: 60_000,
            }),
        )
    }

    #[test]
    fn test_parse_intents() {
        assert_eq!("join".parse::<Intent>().unwrap(), Intent::Join);
        assert_eq!(" LEAVE ".parse::<Intent>().unwrap(), Intent::Leave);
        assert_eq!(
            "register".parse::<Intent>().unwrap(),
            Intent::OpenRegistration
        );
        assert_eq!(
            "cancel".parse::<Intent>().unwrap(),
            Intent::CloseRegistration
        );

        let err = "dance".parse::<Intent>().unwrap_err();
        assert!(err.to_string().contains("unknown action"));
    }

    #[test]
    fn test_join_and_leave() {
        let mut session = session(5);

        match session.apply(Intent::Join).unwrap() {
            IntentOutcome::Joined(entry) => assert_eq!(entry.position, 1),
            other => panic!("unexpected outcome: {other:?}"),
        }
        session.apply(Intent::Join).unwrap();

        let outcome = session.apply(Intent::Leave).unwrap();
        assert!(matches!(outcome, IntentOutcome::Served(Some(ref e)) if e.id == "1"));
        assert_eq!(session.engine().len(), 1);
    }

    #[test]
    fn test_leave_on_empty_is_not_an_error() {
        let mut session = session(5);
        assert_eq!(
            session.apply(Intent::Leave).unwrap(),
            IntentOutcome::Served(None)
        );
    }

    #[test]
    fn test_dialog_does_not_touch_queue() {
        let mut session = session(5);
        session.apply(Intent::Join).unwrap();
        let before = session.engine().entries().to_vec();

        assert_eq!(
            session.apply(Intent::OpenRegistration).unwrap(),
            IntentOutcome::DialogShown
        );
        assert!(session.registration().is_visible());
        assert!(session.view_now().registration_visible);

        session.apply(Intent::CloseRegistration).unwrap();
        assert!(!session.registration().is_visible());
        assert_eq!(session.engine().entries(), before.as_slice());
    }

    #[test]
    fn test_full_session_surfaces_domain_error() {
        let mut session = session(1);
        session.apply(Intent::Join).unwrap();

        let err = session.apply(Intent::Join).unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::CapacityExceeded { capacity: 1 })
        ));
    }

    #[test]
    fn test_view_now_uses_session_clock() {
        let mut session = session(3);
        session.apply(Intent::Join).unwrap();

        let view = session.view_now();
        assert_eq!(view.headline, "1 person in line");
        assert_eq!(view.rows[0].label, "Customer #1");
        assert_eq!(view.rows[0].waiting, "0 min");
    }
}
