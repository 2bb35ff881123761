//! Confirmation Modal State
//!
//! `Closed → Open(context) → Closed`. While open, at most one submission
//! can be in flight; a completion arriving after the modal was closed is
//! ignored.

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalState<C> {
    #[default]
    Closed,
    Open { context: C, submitting: bool },
}

impl<C: Clone> ModalState<C> {
    /// Open with a captured context. Ignored if already open.
    pub fn open(&mut self, context: C) -> bool {
        match self {
            ModalState::Closed => {
                *self = ModalState::Open { context, submitting: false };
                true
            }
            ModalState::Open { .. } => false,
        }
    }

    /// Close and drop the pending context
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, ModalState::Open { submitting: true, .. })
    }

    pub fn context(&self) -> Option<&C> {
        match self {
            ModalState::Open { context, .. } => Some(context),
            ModalState::Closed => None,
        }
    }

    /// Start the confirmed action. Returns the context to act on, or `None`
    /// when there is nothing pending or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<C> {
        match self {
            ModalState::Open { context, submitting } if !*submitting => {
                *submitting = true;
                Some(context.clone())
            }
            _ => None,
        }
    }

    /// Submission failed: make the confirm control usable again
    pub fn submit_failed(&mut self) {
        if let ModalState::Open { submitting, .. } = self {
            *submitting = false;
        }
    }

    /// Submission succeeded
    pub fn submit_succeeded(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_without_context_is_noop() {
        let mut modal = ModalState::<u32>::Closed;
        assert_eq!(modal.begin_submit(), None);
        assert!(!modal.is_submitting());
    }

    #[test]
    fn test_single_submission_in_flight() {
        let mut modal = ModalState::Closed;
        modal.open(42u32);
        assert_eq!(modal.begin_submit(), Some(42));
        assert!(modal.is_submitting());
        // Re-entrant click while in flight
        assert_eq!(modal.begin_submit(), None);
    }

    #[test]
    fn test_failure_keeps_modal_open_and_retryable() {
        let mut modal = ModalState::Closed;
        modal.open("ORD-1".to_string());
        modal.begin_submit();
        modal.submit_failed();
        assert!(modal.is_open());
        assert!(!modal.is_submitting());
        assert_eq!(modal.begin_submit(), Some("ORD-1".to_string()));
    }

    #[test]
    fn test_success_closes() {
        let mut modal = ModalState::Closed;
        modal.open(1u32);
        modal.begin_submit();
        modal.submit_succeeded();
        assert_eq!(modal, ModalState::Closed);
        assert_eq!(modal.context(), None);
    }

    #[test]
    fn test_completion_after_close_is_ignored() {
        let mut modal = ModalState::Closed;
        modal.open(1u32);
        modal.begin_submit();
        modal.close();
        modal.submit_failed();
        assert_eq!(modal, ModalState::Closed);
    }

    #[test]
    fn test_open_does_not_replace_pending_context() {
        let mut modal = ModalState::Closed;
        assert!(modal.open(1u32));
        assert!(!modal.open(2u32));
        assert_eq!(modal.context(), Some(&1));
    }
}
