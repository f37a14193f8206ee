use crate::config::DeploymentConfig;
use crate::domain::model::{DeviceType, RequestContext};
use crate::domain::ports::DeviceClassifier;
use crate::utils::error::{Result, UtilError};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

const BRAND: &str = "inventhora";
const DEV_SUBDOMAIN: &str = "dev";
const TESTING_SUBDOMAIN: &str = "testing";

/// 依主機名稱與部署分支決定租戶子網域
///
/// The marketing site and plain localhost map to `dev`, every preview
/// deployment (branch other than `master`) to `testing`, and production to
/// the first label of the hostname.
pub fn get_subdomain<'a>(hostname: &'a str, config: &DeploymentConfig) -> &'a str {
    let is_local = hostname.starts_with("localhost") && !hostname.contains(BRAND);
    if hostname == config.marketing_domain || is_local {
        tracing::debug!("{} resolves to the {} subdomain", hostname, DEV_SUBDOMAIN);
        return DEV_SUBDOMAIN;
    }

    if !config.is_production_branch() {
        tracing::debug!(
            "Branch {:?} is not production, using the {} subdomain",
            config.normalized_branch(),
            TESTING_SUBDOMAIN
        );
        return TESTING_SUBDOMAIN;
    }

    hostname.split('.').next().unwrap_or(hostname)
}

/// Hostname of a URL, or of a bare `host[:port]` string.
pub fn hostname_from_url(input: &str) -> Result<String> {
    let candidate = if input.contains("://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    };

    let invalid = |reason: String| UtilError::InvalidConfigValueError {
        field: "host".to_string(),
        value: input.to_string(),
        reason,
    };

    let url = Url::parse(&candidate).map_err(|e| invalid(format!("Invalid URL: {}", e)))?;
    url.host_str()
        .map(str::to_string)
        .ok_or_else(|| invalid("URL has no host".to_string()))
}

pub fn is_server(ctx: &RequestContext) -> bool {
    matches!(ctx, RequestContext::Server { .. })
}

/// Phones and tablets count as mobile.
pub fn is_mobile<C: DeviceClassifier + ?Sized>(ctx: &RequestContext, classifier: &C) -> bool {
    let user_agent = ctx.user_agent().unwrap_or_default();
    matches!(
        classifier.device_type(user_agent),
        Some(DeviceType::Mobile | DeviceType::Tablet)
    )
}

static CONSOLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)playstation|xbox|nintendo").expect("console pattern is valid"));
static SMART_TV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)smart-?tv|googletv|appletv|hbbtv|roku|crkey|bravia|\btv\b")
        .expect("smart tv pattern is valid")
});
static WEARABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)watch ?os|wear ?os").expect("wearable pattern is valid"));
static TABLET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)ipad|tablet|playbook|kindle|silk/|kf[a-z]{2,4} build|sm-t\d+|nexus (?:7|9|10)\b")
        .expect("tablet pattern is valid")
});
static MOBILE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)iphone|ipod|windows phone|iemobile|blackberry|bb10|opera mini|\bmobile\b")
        .expect("mobile pattern is valid")
});
static ANDROID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bandroid\b").expect("android pattern is valid"));

/// Pattern based user-agent classifier covering the common device families.
///
/// Known gaps, all from reading the UA string alone:
///
/// - iPadOS in desktop mode sends a `Macintosh` UA and is classified as a
///   desktop (`None`); telling it apart needs touch detection on the client.
/// - Families are matched by keyword, not by a device database, so rare
///   vendors fall back to the `Mobile` token or the Android-without-`Mobile`
///   tablet rule.
/// - There is no bot category: crawlers are classified by the device they
///   claim to be.
///
/// Plug a different [`DeviceClassifier`] into [`is_mobile`] when these matter.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserAgentClassifier;

impl DeviceClassifier for UserAgentClassifier {
    fn device_type(&self, user_agent: &str) -> Option<DeviceType> {
        if CONSOLE.is_match(user_agent) {
            return Some(DeviceType::Console);
        }
        if SMART_TV.is_match(user_agent) {
            return Some(DeviceType::SmartTv);
        }
        if WEARABLE.is_match(user_agent) {
            return Some(DeviceType::Wearable);
        }
        if TABLET.is_match(user_agent) {
            return Some(DeviceType::Tablet);
        }
        if MOBILE.is_match(user_agent) {
            return Some(DeviceType::Mobile);
        }
        // Android 平板的 UA 不含 "Mobile"
        if ANDROID.is_match(user_agent) {
            return Some(DeviceType::Tablet);
        }
        None
    }
}
