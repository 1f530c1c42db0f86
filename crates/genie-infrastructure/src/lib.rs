pub mod config_service;
pub mod logo;
pub mod paths;
pub mod sound;

pub use crate::config_service::ConfigService;
pub use crate::logo::{LogoImage, load_logo};
pub use crate::paths::GeniePaths;
pub use crate::sound::{NotificationSound, RodioChime, SilentChime, chime_from_config, play_detached};
