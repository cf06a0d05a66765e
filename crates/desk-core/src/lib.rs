pub mod anim;
pub mod camera;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod drag;
pub mod error;
pub mod gesture;
pub mod hover;
pub mod input;
pub mod layout;
pub mod picking;
pub mod scene;
pub mod session;
pub mod snapshot;
pub mod win;

pub use camera::{Camera, OrbitController};
pub use config::{DeskBounds, InteractionConfig};
pub use dispatch::Popup;
pub use error::SceneError;
pub use gesture::{Effect, Effects, Mode, SessionState};
pub use hover::CursorStyle;
pub use input::{PointerButton, PointerEvent};
pub use scene::{ObjectId, ObjectKind, Scene, SceneObject};
pub use session::Interaction;
