//! Camera and hand-tracking collaborators
//!
//! The game loop only sees the traits here. `blob` and `synthetic` provide
//! working implementations so a round can run without a webcam or a
//! landmark model.

pub mod blob;
pub mod camera;
pub mod frame;
pub mod synthetic;
pub mod tracker;

pub use blob::{BlobTrackerConfig, ColorBlobTracker};
pub use camera::{Camera, CameraProvider, CameraSession};
pub use frame::Frame;
pub use synthetic::{ScriptConfig, ScriptedCamera, ScriptedCameraProvider};
pub use tracker::{Detection, HandTracker};
