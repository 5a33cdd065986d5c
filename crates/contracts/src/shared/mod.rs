pub mod codec;
pub mod error;
pub mod i18n;
pub mod metadata;
pub mod record;
pub mod status;
