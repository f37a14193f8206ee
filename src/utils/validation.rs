use crate::utils::error::{Result, UtilError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(UtilError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 驗證裸主機名稱（不含 scheme、路徑或埠號）
pub fn validate_hostname(field_name: &str, hostname: &str) -> Result<()> {
    validate_non_empty_string(field_name, hostname)?;

    let invalid = |reason: String| UtilError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: hostname.to_string(),
        reason,
    };

    match Url::parse(&format!("https://{}", hostname)) {
        Ok(url) => match url.host_str() {
            Some(host) if host.eq_ignore_ascii_case(hostname) => Ok(()),
            _ => Err(invalid(
                "Expected a bare hostname without scheme, port or path".to_string(),
            )),
        },
        Err(e) => Err(invalid(format!("Invalid hostname: {}", e))),
    }
}
