//! Content sniffing by leading magic bytes.

const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];
const PDF: &[u8] = b"%PDF";

/// Longest signature we look at.
pub const SIGNATURE_LEN: usize = 8;

/// MIME type of `head` if it starts with a known document signature.
pub fn sniff_mime_type(head: &[u8]) -> Option<&'static str> {
    if head.starts_with(PNG) {
        Some("image/png")
    } else if head.starts_with(JPEG) {
        Some("image/jpeg")
    } else if head.starts_with(PDF) {
        Some("application/pdf")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_supported_documents() {
        assert_eq!(
            sniff_mime_type(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00]),
            Some("image/png")
        );
        assert_eq!(sniff_mime_type(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(sniff_mime_type(b"%PDF-1.7\n"), Some("application/pdf"));
    }

    #[test]
    fn unknown_or_truncated_input() {
        assert_eq!(sniff_mime_type(b"MZ\x90\x00"), None);
        assert_eq!(sniff_mime_type(&[0x89, b'P', b'N']), None);
        assert_eq!(sniff_mime_type(&[]), None);
    }
}
