//! Drives the form: one submit in flight at most, copy with a self-clearing marker.

use std::sync::{Arc, Mutex, MutexGuard};

use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::warn;

use crate::client::state::{FormEvent, FormState, COPIED_DISPLAY};
use crate::client::{ClientError, Clipboard, Notifier, TransformApi};
use crate::transform::generator::VARIATION_COUNT;
use crate::transform::models::TransformRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank text or a request already in flight.
    Skipped,
    Succeeded,
    Failed,
}

pub struct FormController {
    state: Arc<Mutex<FormState>>,
    api: Arc<dyn TransformApi>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn Notifier>,
}

/// Clears the busy flag when the submit future completes or is dropped.
struct LoadingGuard<'a>(&'a Mutex<FormState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        dispatch(self.0, FormEvent::SubmitFinished);
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    // State is replaced wholesale, so a poisoned lock still holds a whole record.
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn dispatch(state: &Mutex<FormState>, event: FormEvent) {
    let mut guard = lock(state);
    let current = std::mem::take(&mut *guard);
    *guard = current.apply(event);
}

impl FormController {
    pub fn new(
        api: Arc<dyn TransformApi>,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            api,
            clipboard,
            notifier,
        }
    }

    pub fn snapshot(&self) -> FormState {
        lock(&self.state).clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        dispatch(&self.state, FormEvent::TextChanged(text.into()));
    }

    pub fn set_brand_voice(&self, brand_voice: impl Into<String>) {
        dispatch(&self.state, FormEvent::BrandVoiceChanged(brand_voice.into()));
    }

    /// Sends the current text and voice. On failure the user is alerted and
    /// the displayed variations are left as they were.
    pub async fn submit(&self) -> SubmitOutcome {
        let request = {
            let mut guard = lock(&self.state);
            if !guard.can_submit() {
                return SubmitOutcome::Skipped;
            }
            let current = std::mem::take(&mut *guard);
            *guard = current.apply(FormEvent::SubmitStarted);
            TransformRequest {
                text: Some(guard.text.clone()),
                brand_voice: Some(guard.brand_voice.clone()),
            }
        };
        let _loading = LoadingGuard(&self.state);

        let result = self.api.transform(&request).await.and_then(|variations| {
            if variations.len() == VARIATION_COUNT {
                Ok(variations)
            } else {
                Err(ClientError::WrongCount(variations.len()))
            }
        });

        match result {
            Ok(variations) => {
                dispatch(&self.state, FormEvent::SubmitSucceeded(variations));
                SubmitOutcome::Succeeded
            }
            Err(e) => {
                warn!("Failed to generate: {e}");
                self.notifier.alert(&e.alert_message());
                SubmitOutcome::Failed
            }
        }
    }

    /// Copies variation `index` verbatim and marks it for `COPIED_DISPLAY`.
    ///
    /// The returned handle resolves once the marker's expiry has been applied.
    pub fn copy(&self, index: usize) -> Result<JoinHandle<()>, ClientError> {
        let content = lock(&self.state)
            .variations
            .get(index)
            .map(|v| v.content.clone())
            .ok_or(ClientError::NoSuchVariation(index))?;

        self.clipboard.write_text(&content)?;

        let ticket = {
            let mut guard = lock(&self.state);
            let current = std::mem::take(&mut *guard);
            *guard = current.apply(FormEvent::Copied(index));
            guard.copy_ticket()
        };

        let deadline = Instant::now() + COPIED_DISPLAY;
        let state = Arc::clone(&self.state);
        Ok(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            dispatch(&state, FormEvent::CopyExpired { ticket });
        }))
    }
}
