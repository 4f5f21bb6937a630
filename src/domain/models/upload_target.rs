use reqwest::Url;

/// Token/email pair a verification link was issued for.
///
/// Built once from the link's query string and never changed afterwards. Empty
/// values are treated the same as missing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadTarget {
    token: Option<String>,
    email: Option<String>,
}

impl UploadTarget {
    pub fn new(token: Option<String>, email: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            email: email.filter(|e| !e.is_empty()),
        }
    }

    /// Extracts `token` and `email` from a parsed link. Other parameters are ignored.
    pub fn from_url(url: &Url) -> Self {
        let mut token = None;
        let mut email = None;

        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "token" if token.is_none() => token = Some(value.into_owned()),
                "email" if email.is_none() => email = Some(value.into_owned()),
                _ => {}
            }
        }

        Self::new(token, email)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Both fields present, as required before anything is sent.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.token.as_deref()?, self.email.as_deref()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_token_and_email_from_link() {
        let url = Url::parse(
            "https://portal.example.com/verify?token=abc123&email=jane%40example.com&lang=en",
        )
        .unwrap();
        let target = UploadTarget::from_url(&url);

        assert_eq!(target.token(), Some("abc123"));
        assert_eq!(target.email(), Some("jane@example.com"));
        assert_eq!(target.credentials(), Some(("abc123", "jane@example.com")));
    }

    #[test]
    fn missing_or_empty_params_are_absent() {
        let url = Url::parse("https://portal.example.com/verify?email=jane%40example.com").unwrap();
        let target = UploadTarget::from_url(&url);
        assert_eq!(target.token(), None);
        assert_eq!(target.credentials(), None);

        let url = Url::parse("https://portal.example.com/verify?token=&email=x%40y.z").unwrap();
        assert_eq!(UploadTarget::from_url(&url).token(), None);
    }

    #[test]
    fn first_occurrence_wins() {
        let url = Url::parse("https://p.example.com/?token=one&token=two&email=a%40b.c").unwrap();
        assert_eq!(UploadTarget::from_url(&url).token(), Some("one"));
    }
}
