//! State machine behind the verification upload form.
//!
//! The controller owns the selected file, the drag highlight and the submission
//! state. Views read the state through [`UploadFormController::subscribe`] and
//! drive it with selection and submit calls. `submit` borrows the controller
//! mutably for the whole request, so a second submission or a new selection
//! cannot overlap an in-flight one.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::{
    application::{
        error::ApplicationError,
        services::VerificationService,
        validator::{validate, RejectionReason, ValidationOutcome},
    },
    domain::{
        config::policy::UploadPolicy,
        models::{document::UploadReceipt, file::SelectedFile, upload_target::UploadTarget},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    NoFile,
    FileInvalid(RejectionReason),
    FileValid,
    Submitting,
    SubmittedOk(Option<UploadReceipt>),
    SubmittedError(String),
}

impl FormState {
    pub fn name(&self) -> &'static str {
        match self {
            FormState::NoFile => "no_file",
            FormState::FileInvalid(_) => "file_invalid",
            FormState::FileValid => "file_valid",
            FormState::Submitting => "submitting",
            FormState::SubmittedOk(_) => "submitted_ok",
            FormState::SubmittedError(_) => "submitted_error",
        }
    }
}

pub struct UploadFormController {
    service: Arc<dyn VerificationService>,
    policy: UploadPolicy,
    target: UploadTarget,
    file: Option<SelectedFile>,
    outcome: Option<ValidationOutcome>,
    dragging: bool,
    state: watch::Sender<FormState>,
}

impl UploadFormController {
    pub fn new(
        service: Arc<dyn VerificationService>,
        policy: UploadPolicy,
        target: UploadTarget,
    ) -> Self {
        let (state, _) = watch::channel(FormState::NoFile);
        Self {
            service,
            policy,
            target,
            file: None,
            outcome: None,
            dragging: false,
            state,
        }
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    pub fn target(&self) -> &UploadTarget {
        &self.target
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn outcome(&self) -> Option<ValidationOutcome> {
        self.outcome
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.file.is_some()
            && self.outcome.is_some_and(|o| o.accepted)
            && *self.state.borrow() != FormState::Submitting
    }

    fn set_state(&self, next: FormState) {
        let previous = self.state.send_replace(next);
        info!(
            "Form state {} -> {}",
            previous.name(),
            self.state.borrow().name()
        );
    }

    /// Replaces the current selection. A rejected file is never retained.
    pub fn select_file(&mut self, file: SelectedFile) -> ValidationOutcome {
        let outcome = validate(&file, &self.policy);
        self.outcome = Some(outcome);

        match outcome.reason {
            None => {
                info!(
                    "Selected '{}' ({} bytes, mime '{}')",
                    file.filename, file.size, file.mime_type
                );
                self.file = Some(file);
                self.set_state(FormState::FileValid);
            }
            Some(reason) => {
                warn!("Rejected '{}': {}", file.filename, reason.code());
                self.file = None;
                self.set_state(FormState::FileInvalid(reason));
            }
        }

        outcome
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Only the first dropped file is considered.
    pub fn drop_files(&mut self, files: Vec<SelectedFile>) -> Option<ValidationOutcome> {
        self.dragging = false;
        if files.len() > 1 {
            info!("{} files dropped, using the first one", files.len());
        }
        files.into_iter().next().map(|file| self.select_file(file))
    }

    /// Uploads the selected file to the verification endpoint.
    ///
    /// Without an accepted file this is a no-op returning
    /// [`ApplicationError::NotReady`]. A link lacking token or email ends in
    /// `SubmittedError` without any request being sent.
    pub async fn submit(&mut self) -> Result<Option<UploadReceipt>, ApplicationError> {
        if *self.state.borrow() == FormState::Submitting {
            return Err(ApplicationError::NotReady);
        }

        let Some(file) = self.file.as_ref() else {
            return Err(ApplicationError::NotReady);
        };

        if !self.outcome.is_some_and(|o| o.accepted) {
            return Err(ApplicationError::NotReady);
        }

        let Some((token, email)) = self.target.credentials() else {
            warn!("Verification link is missing token or email");
            let err = ApplicationError::MissingParameters;
            self.set_state(FormState::SubmittedError(err.to_string()));
            return Err(err);
        };

        let attempt_id = Uuid::new_v4();
        info!(
            "Submitting '{}' for {} (attempt {})",
            file.filename, email, attempt_id
        );
        self.set_state(FormState::Submitting);

        match self.service.upload(file, token, email).await {
            Ok(receipt) => {
                info!("Upload {} accepted", attempt_id);
                self.set_state(FormState::SubmittedOk(receipt.clone()));
                Ok(receipt)
            }
            Err(e) => {
                error!("Upload {} failed: {}", attempt_id, e);
                self.set_state(FormState::SubmittedError(e.to_string()));
                Err(e)
            }
        }
    }
}
