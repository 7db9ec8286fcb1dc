use crate::consts::cli_consts::LOCAL_BACKEND_URL;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Where the admin API lives.
#[derive(Clone, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on the local machine.
    Local,
    /// Any other deployment, identified by its origin (scheme + host, no `/api`).
    Custom { backend_url: String },
}

impl Environment {
    /// Returns the backend origin without a trailing slash.
    pub fn backend_url(&self) -> String {
        match self {
            Environment::Local => LOCAL_BACKEND_URL.to_string(),
            Environment::Custom { backend_url } => backend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the base of every admin API path: the origin plus `/api`.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.backend_url())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Environment::Local);
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            return Ok(Environment::Custom {
                backend_url: trimmed.trim_end_matches('/').to_string(),
            });
        }
        Err(format!(
            "Invalid backend URL: '{}'. Expected 'local' or an http(s) origin.",
            s
        ))
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { backend_url } => write!(f, "{}", backend_url),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, API: {}", self, self.api_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_appends_api_suffix() {
        let env: Environment = "https://admin.example.com/".parse().unwrap();
        assert_eq!(env.backend_url(), "https://admin.example.com");
        assert_eq!(env.api_url(), "https://admin.example.com/api");
        assert_eq!(Environment::Local.api_url(), "http://localhost:8001/api");
    }

    #[test]
    fn parses_local_case_insensitively() {
        assert_eq!("LOCAL".parse::<Environment>().unwrap(), Environment::Local);
    }

    #[test]
    fn rejects_values_without_scheme() {
        assert!("admin.example.com".parse::<Environment>().is_err());
        assert!("".parse::<Environment>().is_err());
    }
}
