use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://api.hackerone.com/v1/hackers";
pub const PAGE_SIZE: u32 = 100;

/// Run-scoped settings. Every field may be omitted from a config file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base: String,
    pub timeout_secs: u64,
    /// Detail requests allowed in flight at once; 1 keeps the run strictly sequential.
    pub concurrency: usize,
    pub paid_only: bool,
    pub accept_invalid_certs: bool,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout_secs: 10,
            concurrency: 1,
            paid_only: false,
            accept_invalid_certs: true,
            user_agent: format!("scope_hunter/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let cfg: Config = serde_json::from_str(&data)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(cfg)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let base = url::Url::parse(&self.api_base)
            .with_context(|| format!("invalid api base url {:?}", self.api_base))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!("api base url must be http(s), got {}", base.scheme());
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout must be at least one second");
        }
        if self.concurrency == 0 {
            anyhow::bail!("concurrency must be at least 1");
        }
        Ok(())
    }

    /// First page of the program index.
    pub fn programs_url(&self) -> String {
        format!(
            "{}/programs?page[size]={}&page[number]=1",
            self.api_base.trim_end_matches('/'),
            PAGE_SIZE
        )
    }

    pub fn program_url(&self, handle: &str) -> String {
        format!(
            "{}/programs/{}",
            self.api_base.trim_end_matches('/'),
            urlencoding::encode(handle)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.timeout_secs, 10);
        assert_eq!(cfg.concurrency, 1);
        assert!(!cfg.paid_only);
        assert!(cfg.validate().is_ok());
        assert_eq!(
            cfg.programs_url(),
            "https://api.hackerone.com/v1/hackers/programs?page[size]=100&page[number]=1"
        );
        assert_eq!(cfg.program_url("acme"), "https://api.hackerone.com/v1/hackers/programs/acme");
    }

    #[test]
    fn test_trailing_slash_and_handle_encoding() {
        let cfg = Config { api_base: "http://localhost:8080/v1/".into(), ..Config::default() };
        assert_eq!(cfg.program_url("a b"), "http://localhost:8080/v1/programs/a%20b");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_url = Config { api_base: "not a url".into(), ..Config::default() };
        assert!(bad_url.validate().is_err());
        let ftp = Config { api_base: "ftp://example.com".into(), ..Config::default() };
        assert!(ftp.validate().is_err());
        let zero = Config { concurrency: 0, ..Config::default() };
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, r#"{{"concurrency": 4, "paid_only": true}}"#).unwrap();
        let cfg = Config::from_file(f.path()).unwrap();
        assert_eq!(cfg.concurrency, 4);
        assert!(cfg.paid_only);
        assert_eq!(cfg.api_base, DEFAULT_API_BASE);
        assert_eq!(cfg.timeout_secs, 10);
    }
}
