use anyhow::{anyhow, Context, Result};
use colored::*;
use image::{ImageBuffer, Rgb};
use nokhwa::{
    pixel_format::RgbFormat,
    utils::{CameraIndex, RequestedFormat, RequestedFormatType},
    Camera,
};

/// Default system camera delivering RGB8 frames.
pub struct CameraSource {
    camera: Camera,
}

impl CameraSource {
    pub fn new(index: u32) -> Result<Self> {
        let requested =
            RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestFrameRate);
        let mut camera = Camera::new(CameraIndex::Index(index), requested)
            .context("Failed to create camera instance")?;

        camera
            .open_stream()
            .map_err(|e| anyhow!(e))
            .context("Failed to open camera stream")?;

        println!(
            "{}",
            format!("Opened camera: {}", camera.info().human_name()).green()
        );
        println!("Format: {}", camera.camera_format());

        Ok(Self { camera })
    }

    /// One decoded frame. Callers skip the frame on error; the stream is
    /// not re-opened.
    pub fn capture(&mut self) -> Result<ImageBuffer<Rgb<u8>, Vec<u8>>> {
        let frame = self
            .camera
            .frame()
            .map_err(|e| anyhow!(e))
            .context("Failed to read frame")?;
        frame
            .decode_image::<RgbFormat>()
            .map_err(|e| anyhow!(e))
            .context("Failed to decode frame")
    }

    pub fn dimensions(&self) -> (u32, u32) {
        let res = self.camera.resolution();
        (res.width(), res.height())
    }
}
