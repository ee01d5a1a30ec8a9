//! The live detection loop, run on a worker thread spawned from the UI.
//! Capture, estimate, classify, overlay, present. Never joined; the
//! window closing (or `q`/Escape) ends it.

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::camera::CameraSource;
use crate::config::AppConfig;
use crate::font;
use crate::inference::OnnxPosePipeline;
use crate::notify;
use crate::output::WindowOutput;
use crate::pipeline::{PosePipeline, SimulatedPosePipeline};
use crate::posture::{self, PostureMonitor};
use crate::skeleton;
use crate::ttf::FontRenderer;

// Consecutive capture failures before the stream counts as ended.
const MAX_CAPTURE_FAILURES: u32 = 30;

fn create_pipeline(model_path: &str) -> Result<Box<dyn PosePipeline>> {
    if Path::new(model_path).exists() {
        Ok(Box::new(OnnxPosePipeline::new(model_path)?))
    } else {
        println!(
            "{}",
            format!("Model '{}' not found. Using simulated pose.", model_path).yellow()
        );
        Ok(Box::new(SimulatedPosePipeline::new()))
    }
}

pub fn run(config: &AppConfig) -> Result<()> {
    let mut camera = CameraSource::new(config.detection.camera_index)?;
    let mut pipeline = create_pipeline(&config.detection.model_path)?;
    println!("Active pipeline: {}", pipeline.name());

    let (width, height) = camera.dimensions();
    let mut window = WindowOutput::new("Posture Detection", width as usize, height as usize)?;
    let font_renderer = FontRenderer::try_load(&config.ui.font_family);

    let mut monitor = PostureMonitor::new();
    let mut capture_failures = 0u32;

    while window.is_open() {
        if window.is_key_down(minifb::Key::Q) || window.is_key_down(minifb::Key::Escape) {
            break;
        }

        // Skip a failed frame; give up once the stream looks gone.
        let mut frame = match camera.capture() {
            Ok(frame) => {
                capture_failures = 0;
                frame
            }
            Err(_) => {
                capture_failures += 1;
                if capture_failures >= MAX_CAPTURE_FAILURES {
                    println!("{}", "Camera stream ended.".yellow());
                    break;
                }
                continue;
            }
        };

        if config.detection.mirror_mode {
            image::imageops::flip_horizontal_in_place(&mut frame);
        }

        let frame_w = frame.width() as usize;
        let frame_h = frame.height() as usize;
        let mut display = frame.as_raw().clone();

        if let Some(landmarks) = pipeline.process(&frame)? {
            skeleton::draw_skeleton(&mut display, frame_w, frame_h, &landmarks);

            let category = posture::classify(&landmarks);
            if let Some(advice) = monitor.update(category) {
                notify::send_posture_alert(advice, config.detection.notification_timeout_secs);
            }

            let (status, color) = if monitor.last().is_slouching() {
                ("Slouching Detected!", (255, 0, 0))
            } else {
                ("Good Posture", (0, 255, 0))
            };
            if let Some(fr) = &font_renderer {
                fr.draw_text(
                    &mut display,
                    frame_w,
                    frame_h,
                    10,
                    10,
                    status,
                    color,
                    config.ui.font_size_pt as f32 * 2.0,
                );
            } else {
                font::draw_text_line(
                    &mut display,
                    frame_w,
                    frame_h,
                    10,
                    10,
                    status,
                    color,
                    config.ui.text_scale * 2,
                );
            }
        }

        window.update(&display)?;
    }

    Ok(())
}
