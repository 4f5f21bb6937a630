use std::path::PathBuf;

use reqwest::Url;
use tracing::{info, warn};

use crate::{
    adapters::{file_loader::load_file, state::AppState, view},
    application::{
        error::ApplicationError,
        form_controller::{FormState, UploadFormController},
        validator::validate,
    },
    domain::models::upload_target::UploadTarget,
};

pub struct VerificationController;

impl VerificationController {
    /// Resolves the token/email pair from a link, or from explicit values.
    pub fn resolve_target(
        link: Option<&str>,
        token: Option<String>,
        email: Option<String>,
    ) -> Result<UploadTarget, ApplicationError> {
        match link {
            Some(link) => {
                let url = Url::parse(link)
                    .map_err(|e| ApplicationError::InvalidLink(format!("{}: {}", link, e)))?;
                Ok(UploadTarget::from_url(&url))
            }
            None => Ok(UploadTarget::new(token, email)),
        }
    }

    /// Validates each file and reports the first rejection as the error.
    pub async fn check(app_state: &AppState, paths: &[PathBuf]) -> Result<(), ApplicationError> {
        let mut first_rejection = None;

        for path in paths {
            let file = load_file(path).await?;
            let outcome = validate(&file, &app_state.policy);
            println!("{}", view::render_outcome(&file.filename, &outcome));

            if let Some(reason) = outcome.reason {
                first_rejection.get_or_insert(ApplicationError::from(reason));
            }
        }

        match first_rejection {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Runs the upload form once: select (or drop) the files, then submit.
    pub async fn upload(
        app_state: &AppState,
        target: UploadTarget,
        paths: &[PathBuf],
    ) -> Result<FormState, ApplicationError> {
        // Only the first file is ever used; the others may fail to load without
        // affecting the upload.
        let mut files = Vec::with_capacity(paths.len());
        for (index, path) in paths.iter().enumerate() {
            match load_file(path).await {
                Ok(file) => files.push(file),
                Err(e) if index > 0 => warn!("Ignoring extra file: {}", e),
                Err(e) => return Err(e),
            }
        }

        let mut form = UploadFormController::new(
            app_state.verification_service.clone(),
            app_state.policy.clone(),
            target,
        );

        let mut rx = form.subscribe();
        let printer = tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let state = rx.borrow_and_update().clone();
                println!("{}", view::render_state(&state));
            }
        });

        let outcome = if files.len() == 1 {
            files.pop().map(|file| form.select_file(file))
        } else {
            form.drag_over();
            form.drop_files(files)
        };

        let result = match outcome.and_then(|o| o.reason) {
            Some(reason) => Err(ApplicationError::from(reason)),
            None => form.submit().await.map(|_| ()),
        };
        let state = form.state();

        drop(form);
        if let Err(e) = printer.await {
            warn!("State printer stopped abnormally: {}", e);
        }

        result?;
        info!("Verification upload finished in state {}", state.name());
        Ok(state)
    }

    pub async fn list_documents(app_state: &AppState, email: &str) -> Result<(), ApplicationError> {
        let documents = app_state
            .verification_service
            .list_documents(email)
            .await?;
        info!("Fetched {} documents for {}", documents.len(), email);
        print!("{}", view::render_documents(&documents));
        Ok(())
    }
}
