//! Plain-text rendering of form state for the terminal.

use crate::{
    application::{form_controller::FormState, validator::ValidationOutcome},
    domain::models::document::VerificationDocument,
};

pub const SUCCESS_MESSAGE: &str = "Your verification document has been uploaded successfully.";
pub const GENERIC_ERROR_MESSAGE: &str =
    "There was an error uploading your document. Please try again.";

pub fn render_state(state: &FormState) -> String {
    match state {
        FormState::NoFile => "Supports PDF, JPG, PNG (max 10MB)".to_string(),
        FormState::FileInvalid(reason) => format!("Invalid File: {}", reason.message()),
        FormState::FileValid => "File Selected".to_string(),
        FormState::Submitting => "Uploading...".to_string(),
        FormState::SubmittedOk(receipt) => {
            match receipt.as_ref().and_then(|r| r.file_url.as_deref()) {
                Some(url) => format!("Success: {} ({})", SUCCESS_MESSAGE, url),
                None => format!("Success: {}", SUCCESS_MESSAGE),
            }
        }
        FormState::SubmittedError(message) if message.is_empty() => {
            format!("Error: {}", GENERIC_ERROR_MESSAGE)
        }
        FormState::SubmittedError(message) => format!("Error: {}", message),
    }
}

pub fn render_outcome(filename: &str, outcome: &ValidationOutcome) -> String {
    match outcome.reason {
        None => format!("ok       {}", filename),
        Some(reason) => format!(
            "rejected {} [{}] {}",
            filename,
            reason.code(),
            reason.message()
        ),
    }
}

pub fn render_documents(documents: &[VerificationDocument]) -> String {
    if documents.is_empty() {
        return "No verification documents found.".to_string();
    }

    let mut out = format!(
        "{:<36}  {:<28}  {:<16}  {:>10}  {}\n",
        "ID", "FILE", "TYPE", "SIZE", "UPLOADED"
    );
    for doc in documents {
        let uploaded = doc
            .uploaded_at
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<36}  {:<28}  {:<16}  {:>10}  {}\n",
            doc.id, doc.file_name, doc.file_type, doc.size, uploaded
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        application::validator::RejectionReason, domain::models::document::UploadReceipt,
    };

    #[test]
    fn error_banner_falls_back_to_generic_text() {
        assert_eq!(
            render_state(&FormState::SubmittedError(String::new())),
            format!("Error: {}", GENERIC_ERROR_MESSAGE)
        );
        assert_eq!(
            render_state(&FormState::SubmittedError("disk full".into())),
            "Error: disk full"
        );
    }

    #[test]
    fn success_banner_mentions_file_url_when_known() {
        let receipt = UploadReceipt {
            file_url: Some("https://bucket/uploads/a.png".into()),
            ..Default::default()
        };
        assert!(render_state(&FormState::SubmittedOk(Some(receipt)))
            .ends_with("(https://bucket/uploads/a.png)"));
        assert_eq!(
            render_state(&FormState::SubmittedOk(None)),
            format!("Success: {}", SUCCESS_MESSAGE)
        );
    }

    #[test]
    fn rejected_outcome_shows_code() {
        let line = render_outcome(
            "id.exe",
            &ValidationOutcome::reject(RejectionReason::InvalidType),
        );
        assert!(line.starts_with("rejected id.exe [invalid_type]"));
    }

    #[test]
    fn documents_table_has_one_row_per_document() {
        let docs = vec![VerificationDocument {
            id: "d-1".into(),
            file_name: "passport.pdf".into(),
            url: "https://bucket/uploads/passport.pdf".into(),
            uploaded_at: Some(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()),
            file_type: "application/pdf".into(),
            size: 1024,
        }];
        let table = render_documents(&docs);
        assert_eq!(table.lines().count(), 2);
        assert!(table.contains("2024-03-01 09:30"));
        assert_eq!(render_documents(&[]), "No verification documents found.");
    }
}
