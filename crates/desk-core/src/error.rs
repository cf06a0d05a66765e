use crate::scene::{LightId, ObjectId};

/// Configuration mistakes made while assembling a scene.
///
/// Runtime outcomes such as "nothing under the pointer" are not errors and
/// never surface through this type.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("unknown scene object {0:?}")]
    UnknownObject(ObjectId),
    #[error("unknown light {0:?}")]
    UnknownLight(LightId),
    #[error("an object named `{0}` already exists")]
    DuplicateName(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
