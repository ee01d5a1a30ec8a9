use crate::types::{landmark_index as li, BodyLandmarks, Landmark};
use anyhow::Result;
use image::{ImageBuffer, Rgb};

/// Per-frame pose estimation: zero or one subject's landmark set.
pub trait PosePipeline {
    fn name(&self) -> String;
    fn process(&mut self, frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<Option<BodyLandmarks>>;
}

/// Fallback when no model file is present: an animated upright figure
/// that periodically drops into a forward slouch, so the detection loop,
/// overlay, and notification path all run without model assets.
pub struct SimulatedPosePipeline {
    start: std::time::Instant,
}

impl SimulatedPosePipeline {
    pub fn new() -> Self {
        Self { start: std::time::Instant::now() }
    }
}

impl Default for SimulatedPosePipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl PosePipeline for SimulatedPosePipeline {
    fn name(&self) -> String {
        "No model (Simulated Pose)".to_string()
    }

    fn process(&mut self, _frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<Option<BodyLandmarks>> {
        let t = self.start.elapsed().as_secs_f32();

        // Head drifts forward and down on a slow cycle; the drift peaks
        // past the classifier thresholds roughly every 12 seconds.
        let drift = ((t * 0.5).sin().max(0.0)).powi(2) * 0.25;

        let mut points = vec![Landmark::default(); li::COUNT];
        let mut set = |idx: usize, x: f32, y: f32| {
            points[idx] = Landmark { x, y, z: 0.0, visibility: 1.0 };
        };

        set(li::NOSE, 0.5 + drift, 0.22 + drift * 1.8);
        set(li::LEFT_EYE, 0.53 + drift, 0.20 + drift * 1.8);
        set(li::RIGHT_EYE, 0.47 + drift, 0.20 + drift * 1.8);
        set(li::LEFT_EAR, 0.56 + drift, 0.21 + drift * 1.8);
        set(li::RIGHT_EAR, 0.44 + drift, 0.21 + drift * 1.8);
        set(li::LEFT_SHOULDER, 0.62, 0.40);
        set(li::RIGHT_SHOULDER, 0.38, 0.40);
        set(li::LEFT_ELBOW, 0.68, 0.55);
        set(li::RIGHT_ELBOW, 0.32, 0.55);
        set(li::LEFT_WRIST, 0.66, 0.68);
        set(li::RIGHT_WRIST, 0.34, 0.68);
        set(li::LEFT_HIP, 0.57, 0.78);
        set(li::RIGHT_HIP, 0.43, 0.78);
        set(li::LEFT_KNEE, 0.57, 0.92);
        set(li::RIGHT_KNEE, 0.43, 0.92);
        set(li::LEFT_ANKLE, 0.57, 0.99);
        set(li::RIGHT_ANKLE, 0.43, 0.99);

        Ok(Some(BodyLandmarks { points }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posture;

    #[test]
    fn simulated_pipeline_yields_full_landmark_sets() {
        let mut pipeline = SimulatedPosePipeline::new();
        let frame = ImageBuffer::new(64, 48);
        let landmarks = pipeline.process(&frame).unwrap().unwrap();
        assert_eq!(landmarks.points.len(), li::COUNT);
        // Normalized coordinates.
        for p in &landmarks.points {
            assert!((0.0..=1.0).contains(&p.x));
            assert!((0.0..=1.0).contains(&p.y));
        }
    }

    #[test]
    fn simulated_pose_starts_upright() {
        // At t ~ 0 the drift is negligible, so the figure classifies as
        // good posture.
        let mut pipeline = SimulatedPosePipeline::new();
        let frame = ImageBuffer::new(64, 48);
        let landmarks = pipeline.process(&frame).unwrap().unwrap();
        assert_eq!(posture::classify(&landmarks), posture::SlouchCategory::None);
    }
}
