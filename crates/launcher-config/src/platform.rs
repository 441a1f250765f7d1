use std::fmt;

/// Hosting platform the launcher is running on.
///
/// Each platform publishes the service's externally reachable address under
/// its own environment variable names. n8n needs that address for its
/// webhook and editor URLs, and the keep-alive check targets it so the
/// platform sees inbound traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Platform {
    Railway,
    Render,
    #[default]
    Generic,
}

const RAILWAY_MARKERS: [&str; 3] = [
    "RAILWAY_ENVIRONMENT",
    "RAILWAY_STATIC_URL",
    "RAILWAY_PUBLIC_DOMAIN",
];
const RAILWAY_URL_VARS: [&str; 2] = ["RAILWAY_STATIC_URL", "RAILWAY_PUBLIC_DOMAIN"];

const RENDER_MARKERS: [&str; 2] = ["RENDER", "RENDER_EXTERNAL_URL"];
const RENDER_URL_VARS: [&str; 1] = ["RENDER_EXTERNAL_URL"];

impl Platform {
    /// Detect the platform using `lookup` to read variables.
    ///
    /// Empty values count as unset.
    pub fn detect_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &&str| lookup(key).is_some_and(|v| !v.trim().is_empty());

        if RAILWAY_MARKERS.iter().any(present) {
            Platform::Railway
        } else if RENDER_MARKERS.iter().any(present) {
            Platform::Render
        } else {
            Platform::Generic
        }
    }

    /// Externally reachable base URL published by the platform, if any.
    ///
    /// Bare domains (Railway's `RAILWAY_PUBLIC_DOMAIN`) get an `https://`
    /// scheme and trailing slashes are trimmed.
    pub fn discover_public_url_with<F>(&self, lookup: F) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars: &[&str] = match self {
            Platform::Railway => &RAILWAY_URL_VARS,
            Platform::Render => &RENDER_URL_VARS,
            Platform::Generic => &[],
        };

        vars.iter()
            .filter_map(|key| lookup(key))
            .map(|v| v.trim().to_string())
            .find(|v| !v.is_empty())
            .map(|v| normalize_url(&v))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Platform::Railway => "railway",
            Platform::Render => "render",
            Platform::Generic => "generic",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Add `https://` to bare hosts and strip trailing slashes.
pub(crate) fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}
