pub mod collections;
pub mod dates;
pub mod objects;
pub mod platform;
pub mod products;
pub mod strings;

pub use crate::domain::model::{
    BannerSettings, DateFormat, DateInput, DeviceType, Dimensions, Language, Product,
    RequestContext, SelectOption, TopBannerMessage,
};
pub use crate::domain::ports::{DeviceClassifier, Translate, TranslationArgs};
pub use crate::utils::error::Result;
