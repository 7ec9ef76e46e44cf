//! Package metadata embedded at build time by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const APP_NAME: &str = APP_METADATA_NAME;
pub const APP_VERSION: &str = APP_METADATA_VERSION;
pub const APP_OWNER: &str = APP_METADATA_OWNER;
