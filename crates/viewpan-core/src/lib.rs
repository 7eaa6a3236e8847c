pub mod config;
pub mod log;
pub mod offset;
pub mod pan;
pub mod provider;
pub mod rect;

pub use config::Config;
pub use offset::Offset;
pub use pan::{ChromeConfig, compute_offset};
pub use provider::{GeometryProvider, recenter_offset};
pub use rect::Rect;
