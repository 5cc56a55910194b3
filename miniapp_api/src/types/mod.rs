mod app_info;
pub use self::app_info::{MiniAppInfo, Version};

mod manifest;
pub use self::manifest::ManifestEntity;
