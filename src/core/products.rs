use crate::core::dates::to_instant;
use crate::domain::model::{BannerSettings, Dimensions, Language, Product, SelectOption, TopBannerMessage};
use crate::domain::ports::{Translate, TranslationArgs};
use crate::utils::js::{interpolate, is_truthy};
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

const PIECES_KEY: &str = "common:pieces";
const TRIAL_KIND: &str = "trial";
const TRIAL_WARNING_DAYS: i64 = 5;

fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|inner| is_truthy(inner))
}

/// 尺寸字串：`H{unit}.`、`HxW{unit}.` 或 `HxWxD{unit}.`
///
/// The form is picked from which of width and depth are set; a depth without
/// a width still takes the three-part form and shows the width as `undefined`.
pub fn construct_dimension_string(dimensions: &Dimensions, length_unit: &str) -> String {
    let height = interpolate(dimensions.height.as_ref());
    let has_width = present(&dimensions.width).is_some();
    let has_depth = present(&dimensions.depth).is_some();

    if !has_width && !has_depth {
        return format!("{}{}.", height, length_unit);
    }

    let width = interpolate(dimensions.width.as_ref());
    if !has_depth {
        return format!("{}x{}{}.", height, width, length_unit);
    }

    let depth = interpolate(dimensions.depth.as_ref());
    format!("{}x{}x{}{}.", height, width, depth, length_unit)
}

/// Human readable product label, e.g. `Chair oak brown 4kg. 90x45x50cm. 2pieces`.
///
/// Parts are appended in a fixed order and missing ones are skipped. The
/// quantity noun comes from the injected translator under `common:pieces`.
pub fn create_product_full_name<T: Translate + ?Sized>(
    product: &Product,
    weight_unit: &str,
    length_unit: &str,
    t: &T,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    for field in [&product.name, &product.material, &product.color] {
        if let Some(value) = present(field) {
            parts.push(interpolate(Some(value)));
        }
    }

    if let Some(weight) = present(&product.weight) {
        parts.push(format!("{}{}.", interpolate(Some(weight)), weight_unit));
    }

    if let Some(dimensions) = &product.dimensions {
        parts.push(construct_dimension_string(dimensions, length_unit));
    }

    if let Some(quantity) = present(&product.quantity) {
        let args = TranslationArgs {
            count: Some(quantity.clone()),
        };
        parts.push(format!(
            "{}{}",
            interpolate(Some(quantity)),
            t.translate(PIECES_KEY, &args)
        ));
    }

    parts.join(" ")
}

/// Banner to show at the top of the app, if any.
pub fn get_banner_message(settings: &BannerSettings) -> Option<TopBannerMessage> {
    get_banner_message_at(settings, Utc::now())
}

/// 試用期在 5 天內到期時顯示 `trialEnd`
pub fn get_banner_message_at(
    settings: &BannerSettings,
    now: DateTime<Utc>,
) -> Option<TopBannerMessage> {
    if settings.kind.as_deref() != Some(TRIAL_KIND) {
        return None;
    }

    let warning_threshold = now + Duration::days(TRIAL_WARNING_DAYS);
    let due_date = settings.due_date.as_ref().and_then(to_instant)?;

    (due_date < warning_threshold).then_some(TopBannerMessage::TrialEnd)
}

/// Languages the UI can be switched to, labelled in the current language.
pub fn get_languages<T: Translate + ?Sized>(t: &T) -> Vec<SelectOption> {
    Language::ALL
        .iter()
        .map(|language| SelectOption {
            value: Value::String(language.code().to_string()),
            label: t.translate(language.label_key(), &TranslationArgs::default()),
            helper_text: None,
        })
        .collect()
}
