use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// 日期顯示格式選擇器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    Daytime,
    Day,
    Time,
}

impl DateFormat {
    /// Display pattern in the front end's `dd.MM.yyyy` notation.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::Daytime => "dd.MM.yyyy - HH:mm",
            DateFormat::Day => "dd.MM.yyyy",
            DateFormat::Time => "HH:mm",
        }
    }

    /// The same pattern in chrono's strftime notation.
    pub(crate) fn chrono_pattern(self) -> &'static str {
        match self {
            DateFormat::Daytime => "%d.%m.%Y - %H:%M",
            DateFormat::Day => "%d.%m.%Y",
            DateFormat::Time => "%H:%M",
        }
    }
}

impl FromStr for DateFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daytime" => Ok(DateFormat::Daytime),
            "day" => Ok(DateFormat::Day),
            "time" => Ok(DateFormat::Time),
            other => Err(format!("unknown date format selector: {}", other)),
        }
    }
}

/// A date as the front end hands it over.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Text(String),
    Instant(DateTime<Utc>),
}

impl DateInput {
    /// 空字串、0 或 "N/A" 直接原樣回傳，不做格式化
    pub fn is_passthrough(&self) -> bool {
        match self {
            DateInput::Timestamp(ms) => *ms == 0,
            DateInput::Text(text) => text.is_empty() || text == "N/A",
            DateInput::Instant(_) => false,
        }
    }
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Timestamp(ms) => write!(f, "{}", ms),
            DateInput::Text(text) => f.write_str(text),
            DateInput::Instant(instant) => write!(f, "{}", instant.to_rfc3339()),
        }
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        DateInput::Timestamp(ms)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(instant: DateTime<Utc>) -> Self {
        DateInput::Instant(instant)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: Option<Value>,
    pub width: Option<Value>,
    pub depth: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: Option<Value>,
    pub material: Option<Value>,
    pub color: Option<Value>,
    pub weight: Option<Value>,
    pub dimensions: Option<Dimensions>,
    pub quantity: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerSettings {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub due_date: Option<DateInput>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopBannerMessage {
    #[serde(rename = "trialEnd")]
    TrialEnd,
}

impl TopBannerMessage {
    pub fn as_str(self) -> &'static str {
        match self {
            TopBannerMessage::TrialEnd => "trialEnd",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
    Pt,
    De,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Es, Language::En, Language::Pt, Language::De];

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Pt => "pt",
            Language::De => "de",
        }
    }

    /// Translation key of the language's display name.
    pub fn label_key(self) -> &'static str {
        match self {
            Language::Es => "common:spanish",
            Language::En => "common:english",
            Language::Pt => "common:portuguese",
            Language::De => "common:german",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption {
    pub value: Value,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Console,
    Mobile,
    Tablet,
    SmartTv,
    Wearable,
    Embedded,
}

/// Where a user agent can be read from.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestContext {
    /// Server-side rendering: the incoming request's headers.
    Server { headers: HashMap<String, String> },
    /// In the browser: the runtime's own agent string.
    Client { user_agent: String },
}

impl RequestContext {
    pub fn user_agent(&self) -> Option<&str> {
        match self {
            RequestContext::Server { headers } => headers
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case("user-agent"))
                .map(|(_, value)| value.as_str()),
            RequestContext::Client { user_agent } => Some(user_agent.as_str()),
        }
    }
}
