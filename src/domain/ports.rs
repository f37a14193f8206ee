use crate::domain::model::DeviceType;
use serde_json::Value;

/// Interpolation arguments passed along with a translation key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationArgs {
    pub count: Option<Value>,
}

/// Translation lookup injected by the caller (`t(key, { count })`).
pub trait Translate {
    fn translate(&self, key: &str, args: &TranslationArgs) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str, &TranslationArgs) -> String,
{
    fn translate(&self, key: &str, args: &TranslationArgs) -> String {
        self(key, args)
    }
}

/// User-agent classification. `None` means a desktop or unknown device.
pub trait DeviceClassifier {
    fn device_type(&self, user_agent: &str) -> Option<DeviceType>;
}
