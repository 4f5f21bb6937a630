//! Accept/reject decision for a candidate verification document.
//!
//! Browsers and file systems report MIME types unreliably, so a file passes the
//! type check when either its declared MIME type or its extension is on the
//! policy's allow-list. Type is checked before size.

use crate::{
    application::error::ApplicationError,
    domain::{config::policy::UploadPolicy, models::file::SelectedFile},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    InvalidType,
    InvalidSize,
}

impl RejectionReason {
    pub fn code(self) -> &'static str {
        ApplicationError::from(self).code()
    }

    pub fn message(self) -> String {
        ApplicationError::from(self).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub accepted: bool,
    pub reason: Option<RejectionReason>,
}

impl ValidationOutcome {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: None,
        }
    }

    pub fn reject(reason: RejectionReason) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
        }
    }
}

pub fn validate(file: &SelectedFile, policy: &UploadPolicy) -> ValidationOutcome {
    validate_metadata(&file.filename, &file.mime_type, file.size, policy)
}

pub fn validate_metadata(
    filename: &str,
    mime_type: &str,
    size: u64,
    policy: &UploadPolicy,
) -> ValidationOutcome {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let valid_type = policy.allows_mime_type(mime_type)
        || (!extension.is_empty() && policy.allows_extension(&extension));

    if !valid_type {
        return ValidationOutcome::reject(RejectionReason::InvalidType);
    }

    if size > policy.max_size {
        return ValidationOutcome::reject(RejectionReason::InvalidSize);
    }

    ValidationOutcome::accept()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u64 = 10_485_760;

    fn check(name: &str, mime: &str, size: u64) -> ValidationOutcome {
        validate_metadata(name, mime, size, &UploadPolicy::default())
    }

    #[test]
    fn png_under_limit_is_accepted() {
        assert_eq!(check("id.png", "image/png", 2_000_000), ValidationOutcome::accept());
    }

    #[test]
    fn executable_is_rejected_as_invalid_type() {
        let outcome = check("id.exe", "", 1_000);
        assert!(!outcome.accepted);
        assert_eq!(outcome.reason, Some(RejectionReason::InvalidType));
        assert_eq!(RejectionReason::InvalidType.code(), "invalid_type");
    }

    #[test]
    fn oversized_pdf_is_rejected_as_invalid_size() {
        let outcome = check("scan.pdf", "application/pdf", 11_000_000);
        assert_eq!(outcome, ValidationOutcome::reject(RejectionReason::InvalidSize));
        assert_eq!(RejectionReason::InvalidSize.code(), "invalid_size");
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(check("scan.pdf", "", MAX).accepted);
        assert!(!check("scan.pdf", "", MAX + 1).accepted);
    }

    #[test]
    fn allowed_extensions_pass_in_any_case_with_unreliable_mime() {
        for name in ["a.jpg", "a.JPG", "a.jpeg", "a.JpEg", "a.png", "a.PNG", "a.pdf", "a.Pdf"] {
            for mime in ["", "application/octet-stream", "text/plain"] {
                assert!(check(name, mime, 0).accepted, "{name} / {mime}");
                assert!(check(name, mime, MAX).accepted, "{name} / {mime}");
            }
        }
    }

    #[test]
    fn allowed_mime_type_rescues_unknown_extension() {
        assert!(check("photo", "image/jpeg", 10).accepted);
        assert!(check("upload.bin", "application/pdf", 10).accepted);
    }

    #[test]
    fn only_the_last_extension_counts() {
        assert!(!check("scan.pdf.exe", "", 10).accepted);
        assert!(check("scan.exe.pdf", "", 10).accepted);
    }

    #[test]
    fn oversized_is_rejected_regardless_of_type() {
        for (name, mime) in [("a.png", "image/png"), ("a.pdf", ""), ("a.txt", "text/plain")] {
            assert!(!check(name, mime, MAX + 1).accepted);
        }
    }

    #[test]
    fn type_is_reported_before_size() {
        let outcome = check("a.txt", "text/plain", MAX * 2);
        assert_eq!(outcome.reason, Some(RejectionReason::InvalidType));
    }

    #[test]
    fn validation_is_repeatable() {
        let file = SelectedFile::new(vec![1, 2, 3], "doc.PDF".into(), String::new());
        let policy = UploadPolicy::default();
        assert_eq!(validate(&file, &policy), validate(&file, &policy));
    }

    #[test]
    fn policy_limits_are_honoured() {
        let policy = UploadPolicy {
            max_size: 100,
            extensions: vec!["png".into()],
            mime_types: vec![],
        };
        assert!(validate_metadata("a.png", "", 100, &policy).accepted);
        assert!(!validate_metadata("a.pdf", "application/pdf", 1, &policy).accepted);
        assert!(!validate_metadata("a.png", "", 101, &policy).accepted);
    }
}
