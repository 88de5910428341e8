//! Form state as an immutable record. Every change goes through `apply`.

use std::time::Duration;

use crate::transform::generator::Variation;
use crate::transform::prompts::DEFAULT_BRAND_VOICE;

/// How long the "copied" marker stays on a card.
pub const COPIED_DISPLAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub text: String,
    pub brand_voice: String,
    pub loading: bool,
    pub variations: Vec<Variation>,
    pub copied_index: Option<usize>,
    /// Bumped on every copy so a stale expiry cannot clear a newer marker.
    copy_ticket: u64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            text: String::new(),
            brand_voice: DEFAULT_BRAND_VOICE.to_string(),
            loading: false,
            variations: Vec::new(),
            copied_index: None,
            copy_ticket: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    TextChanged(String),
    BrandVoiceChanged(String),
    SubmitStarted,
    SubmitSucceeded(Vec<Variation>),
    SubmitFinished,
    Copied(usize),
    CopyExpired { ticket: u64 },
}

impl FormState {
    /// Submit is offered only with non-blank text and nothing in flight.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.text.trim().is_empty()
    }

    pub fn copy_ticket(&self) -> u64 {
        self.copy_ticket
    }

    pub fn apply(self, event: FormEvent) -> FormState {
        match event {
            FormEvent::TextChanged(text) => FormState { text, ..self },
            FormEvent::BrandVoiceChanged(brand_voice) => FormState {
                brand_voice,
                ..self
            },
            FormEvent::SubmitStarted if self.can_submit() => FormState {
                loading: true,
                ..self
            },
            FormEvent::SubmitStarted => self,
            FormEvent::SubmitSucceeded(variations) => FormState {
                variations,
                copied_index: None,
                ..self
            },
            FormEvent::SubmitFinished => FormState {
                loading: false,
                ..self
            },
            FormEvent::Copied(index) => FormState {
                copied_index: Some(index),
                copy_ticket: self.copy_ticket + 1,
                ..self
            },
            FormEvent::CopyExpired { ticket } if ticket == self.copy_ticket => FormState {
                copied_index: None,
                ..self
            },
            FormEvent::CopyExpired { .. } => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Vec<Variation> {
        (0..5)
            .map(|i| Variation {
                kind: format!("Style {i}"),
                content: format!("Post {i}"),
            })
            .collect()
    }

    fn with_text(text: &str) -> FormState {
        FormState::default().apply(FormEvent::TextChanged(text.to_string()))
    }

    #[test]
    fn test_default_voice_is_preselected() {
        assert_eq!(FormState::default().brand_voice, DEFAULT_BRAND_VOICE);
    }

    #[test]
    fn test_blank_text_cannot_submit() {
        let state = with_text("  \n ");
        assert!(!state.can_submit());
        assert!(!state.apply(FormEvent::SubmitStarted).loading);
    }

    #[test]
    fn test_submit_is_ignored_while_loading() {
        let loading = with_text("hello").apply(FormEvent::SubmitStarted);
        assert!(loading.loading);
        assert!(!loading.can_submit());
        assert_eq!(loading.clone().apply(FormEvent::SubmitStarted), loading);
    }

    #[test]
    fn test_success_replaces_results_in_order() {
        let state = with_text("hello")
            .apply(FormEvent::SubmitStarted)
            .apply(FormEvent::SubmitSucceeded(five()))
            .apply(FormEvent::SubmitFinished);
        assert!(!state.loading);
        assert_eq!(state.variations, five());
    }

    #[test]
    fn test_finish_without_success_keeps_prior_results() {
        let shown = with_text("hello").apply(FormEvent::SubmitSucceeded(five()));
        let after = shown
            .clone()
            .apply(FormEvent::SubmitStarted)
            .apply(FormEvent::SubmitFinished);
        assert_eq!(after.variations, shown.variations);
        assert!(!after.loading);
    }

    #[test]
    fn test_newer_copy_supersedes_pending_expiry() {
        let first = with_text("x")
            .apply(FormEvent::SubmitSucceeded(five()))
            .apply(FormEvent::Copied(1));
        let stale_ticket = first.copy_ticket();
        let second = first.apply(FormEvent::Copied(3));

        let after_stale = second.clone().apply(FormEvent::CopyExpired {
            ticket: stale_ticket,
        });
        assert_eq!(after_stale.copied_index, Some(3));

        let ticket = second.copy_ticket();
        let cleared = second.apply(FormEvent::CopyExpired { ticket });
        assert_eq!(cleared.copied_index, None);
    }
}
