//! Codec configuration.
//!
//! The only setting that varies between exchange partners is the native
//! code page. It can come from a serialized config file or from the
//! `X937_CCSID` environment variable.

use x937_encoding::{CodePage, CodePageRegistry};

use crate::error::CodecError;
use crate::Result;

/// Settings for a [`RecordCodec`](crate::RecordCodec).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// CCSID of the native text encoding.
    pub ccsid: u16,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self { ccsid: 37 }
    }
}

impl CodecConfig {
    /// Environment variable read by [`from_env`](CodecConfig::from_env).
    pub const CCSID_ENV: &'static str = "X937_CCSID";

    /// Read the configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(Self::CCSID_ENV).ok().as_deref())
    }

    /// Interpret a raw `X937_CCSID` value: a CCSID number ("037") or a
    /// code page name ("CP1140"). `None` or blank gives the default.
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(Self::default());
        };

        let page = match raw.parse::<u16>() {
            Ok(ccsid) => CodePageRegistry::from_ccsid(ccsid),
            Err(_) => CodePageRegistry::by_name(raw),
        }
        .map_err(|e| CodecError::configuration("CodecConfig", format!("{}: {e}", Self::CCSID_ENV)))?;

        Ok(Self { ccsid: page.ccsid })
    }

    /// Resolve the configured code page.
    pub fn code_page(&self) -> Result<&'static CodePage> {
        CodePageRegistry::from_ccsid(self.ccsid)
            .map_err(|e| CodecError::configuration("CodecConfig", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_is_cp037() {
        let config = CodecConfig::default();
        assert_eq!(config.ccsid, 37);
        assert_eq!(config.code_page().unwrap().name, "CP037");
    }

    #[test]
    fn test_env_value_numeric() {
        assert_eq!(CodecConfig::from_env_value(Some("1140")).unwrap().ccsid, 1140);
        assert_eq!(CodecConfig::from_env_value(Some(" 037 ")).unwrap().ccsid, 37);
    }

    #[test]
    fn test_env_value_name() {
        assert_eq!(CodecConfig::from_env_value(Some("IBM-500")).unwrap().ccsid, 500);
    }

    #[test]
    fn test_env_value_absent() {
        assert_eq!(CodecConfig::from_env_value(None).unwrap(), CodecConfig::default());
        assert_eq!(CodecConfig::from_env_value(Some("  ")).unwrap(), CodecConfig::default());
    }

    #[test]
    fn test_env_value_invalid() {
        let err = CodecConfig::from_env_value(Some("1208")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("X937_CCSID"));
    }

    #[test]
    fn test_unknown_ccsid() {
        let err = CodecConfig { ccsid: 4 }.code_page().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = CodecConfig { ccsid: 500 };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"ccsid":500}"#);
        let back: CodecConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_serde_defaults_missing_fields() {
        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
    }
}
