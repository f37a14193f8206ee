pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliArgs, Command};
pub use config::DeploymentConfig;

pub use crate::core::collections::{
    get_object_key_by_string, remove_from_array, remove_from_object_array, uniquify_array,
    uniquify_object_array, KeyLookup,
};
pub use crate::core::dates::{
    format_date, format_instant, get_date_time_format, is_valid_date, parse_date,
    parse_date_with_reference, FormattedDate,
};
pub use crate::core::objects::{clean_object, get_error_message, parse_number, round_to, round_to_number};
pub use crate::core::platform::{
    get_subdomain, hostname_from_url, is_mobile, is_server, UserAgentClassifier,
};
pub use crate::core::products::{
    construct_dimension_string, create_product_full_name, get_banner_message,
    get_banner_message_at, get_languages,
};
pub use crate::core::strings::{
    capitalize_string, generate_random_string, generate_random_string_with, generate_slug,
};
pub use domain::model::{
    BannerSettings, DateFormat, DateInput, DeviceType, Dimensions, Language, Product,
    RequestContext, SelectOption, TopBannerMessage,
};
pub use domain::ports::{DeviceClassifier, Translate, TranslationArgs};
pub use utils::error::{Result, UtilError};
