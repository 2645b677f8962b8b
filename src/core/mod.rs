//! Platform-independent player logic.
//!
//! Nothing in this tree touches `web_sys`; the host-side tests under
//! `tests/` compile these modules directly.

pub mod ambient;
pub mod catalog;
pub mod constants;
pub mod fx;
pub mod gesture;
pub mod idle;
pub mod keys;
pub mod navigation;
pub mod prefs;
pub mod video;

pub use ambient::*;
pub use catalog::*;
pub use fx::{FxId, FxSelection};
pub use navigation::SceneNavigator;
pub use video::VideoMode;
