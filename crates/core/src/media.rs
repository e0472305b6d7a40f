//! Media URL resolution.
//!
//! The content API returns media either as absolute URLs or as paths
//! relative to the upload directory. [`MediaResolver`] turns both into
//! absolute URLs at render time.

/// Resolves media references against a fixed upload base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResolver {
    upload_base: String,
}

impl MediaResolver {
    /// Create a resolver for the given upload base, e.g.
    /// `https://deccanservices.demovoting.com/uploads`.
    ///
    /// Trailing slashes on the base are ignored.
    pub fn new(upload_base: impl Into<String>) -> Self {
        let upload_base: String = upload_base.into();
        Self {
            upload_base: upload_base.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve a media reference.
    ///
    /// Absolute `http`/`https` URLs are returned unchanged; anything else is
    /// joined onto the upload base with exactly one `/` between them.
    ///
    /// # Examples
    ///
    /// ```
    /// use deccan_core::media::MediaResolver;
    ///
    /// let media = MediaResolver::new("https://cdn.example/uploads/");
    /// assert_eq!(media.resolve("foo.jpg"), "https://cdn.example/uploads/foo.jpg");
    /// assert_eq!(media.resolve("https://x/y.jpg"), "https://x/y.jpg");
    /// ```
    pub fn resolve(&self, reference: &str) -> String {
        if is_absolute(reference) {
            return reference.to_string();
        }
        format!(
            "{}/{}",
            self.upload_base,
            reference.trim_start_matches('/')
        )
    }
}

fn is_absolute(reference: &str) -> bool {
    let lower = reference.get(..8).unwrap_or(reference).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://deccanservices.demovoting.com/uploads";

    #[test]
    fn relative_path_joins_upload_base() {
        let media = MediaResolver::new(BASE);
        assert_eq!(media.resolve("foo.jpg"), format!("{BASE}/foo.jpg"));
    }

    #[test]
    fn absolute_url_is_unchanged() {
        let media = MediaResolver::new(BASE);
        assert_eq!(media.resolve("https://x/y.jpg"), "https://x/y.jpg");
        assert_eq!(media.resolve("http://x/y.jpg"), "http://x/y.jpg");
    }

    #[test]
    fn scheme_check_is_case_insensitive() {
        let media = MediaResolver::new(BASE);
        assert_eq!(media.resolve("HTTPS://X/y.jpg"), "HTTPS://X/y.jpg");
    }

    #[test]
    fn slashes_are_not_doubled() {
        let media = MediaResolver::new(format!("{BASE}/"));
        assert_eq!(media.resolve("/gallery/a.png"), format!("{BASE}/gallery/a.png"));
    }

    #[test]
    fn nested_relative_path_is_kept() {
        let media = MediaResolver::new(BASE);
        assert_eq!(
            media.resolve("services/2024/oven.webp"),
            format!("{BASE}/services/2024/oven.webp")
        );
    }
}
