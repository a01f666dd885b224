use std::env;
use std::path::PathBuf;

use crate::error::CampaignError;

pub const DEFAULT_MAIL_TO: &str = "team@senatorcheptoo.ke";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Web server
    pub web_host: String,
    pub web_port: u16,

    // Mail handoff destination
    pub mail_to: String,

    // Newsletter cache
    pub cache_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            web_host: "0.0.0.0".to_string(),
            web_port: 3000,
            mail_to: DEFAULT_MAIL_TO.to_string(),
            cache_dir: PathBuf::from("data"),
        }
    }
}

impl Config {
    /// Load configuration from environment variables. Every value has a default;
    /// a malformed `WEB_PORT` or `CAMPAIGN_MAIL_TO` is an error.
    pub fn from_env() -> Result<Self, CampaignError> {
        let defaults = Self::default();
        let web_port = match env::var("WEB_PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| CampaignError::Config(format!("WEB_PORT must be a number, got {raw:?}")))?,
            Err(_) => defaults.web_port,
        };

        let mail_to = match env::var("CAMPAIGN_MAIL_TO") {
            Ok(raw) if !raw.trim().is_empty() => {
                let addr = raw.trim().to_string();
                check_mail_to(&addr)?;
                addr
            }
            _ => defaults.mail_to,
        };

        Ok(Self {
            web_host: env::var("WEB_HOST").unwrap_or(defaults.web_host),
            web_port,
            mail_to,
            cache_dir: env::var("CAMPAIGN_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_dir),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.web_host, self.web_port)
    }
}

/// The destination is written unencoded into the mail link and sent back in a
/// `Location` header, so it must be a bare printable-ASCII address.
pub fn check_mail_to(addr: &str) -> Result<(), CampaignError> {
    let printable = addr.bytes().all(|b| b.is_ascii_graphic());
    let has_link_syntax = addr.contains(['?', '&', '#']);
    match addr.split_once('@') {
        Some((local, domain))
            if printable && !has_link_syntax && !local.is_empty() && !domain.is_empty() =>
        {
            Ok(())
        }
        _ => Err(CampaignError::Config(format!(
            "CAMPAIGN_MAIL_TO must be a plain email address, got {addr:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.mail_to, "team@senatorcheptoo.ke");
        assert_eq!(config.cache_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_mail_to_must_fit_in_a_header() {
        assert!(check_mail_to(DEFAULT_MAIL_TO).is_ok());
        assert!(check_mail_to("volunteers@example.org").is_ok());
        for bad in [
            "team@example.ke\r\nX-Injected: 1",
            "team @example.ke",
            "tïm@example.ke",
            "team@example.ke?cc=other@example.ke",
            "no-at-sign",
            "@example.ke",
        ] {
            assert!(
                matches!(check_mail_to(bad), Err(CampaignError::Config(_))),
                "{bad:?}"
            );
        }
    }
}
