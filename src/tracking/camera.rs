//! Camera collaborator and scoped device handle

use super::frame::Frame;
use crate::error::CameraError;

/// An opened capture device
pub trait Camera {
    /// Next frame, or an error once the device stops delivering
    fn acquire_frame(&mut self) -> Result<Frame, CameraError>;

    /// Give the device back
    fn release(&mut self);
}

/// Opens capture devices at round start
pub trait CameraProvider {
    fn open(&mut self) -> Result<Box<dyn Camera>, CameraError>;
}

/// Owns an open camera for the length of a round.
///
/// The device is released exactly once: explicitly through
/// [`CameraSession::release`], or on drop for every other exit path,
/// including unwinding.
pub struct CameraSession {
    camera: Box<dyn Camera>,
    released: bool,
}

impl CameraSession {
    pub fn open(provider: &mut dyn CameraProvider) -> Result<Self, CameraError> {
        let camera = provider.open()?;
        log::info!("Camera opened");
        Ok(Self {
            camera,
            released: false,
        })
    }

    pub fn acquire_frame(&mut self) -> Result<Frame, CameraError> {
        self.camera.acquire_frame()
    }

    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.camera.release();
            log::info!("Camera released");
        }
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.release_once();
    }
}
