pub mod assets;
pub mod commands;
pub mod error_fmt;
pub mod layout;
pub mod output;
pub mod render;
pub mod request;
pub mod settings;

// Re-export commonly used types for convenience
pub use assets::{AssetBundle, AssetError, AssetMode, CardAssets};
pub use layout::{CELLS, GRID_SIZE, Layout, LayoutSet, generate};
pub use render::{CardRenderer, RenderError};
pub use request::{CardRequest, RequestError};
pub use settings::{Settings, SettingsError};
