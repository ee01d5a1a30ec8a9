use anyhow::Result;
use image::{imageops::FilterType, ImageBuffer, Rgb};
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;

use crate::pipeline::PosePipeline;
use crate::types::{landmark_index as li, BodyLandmarks, Landmark};

const INPUT_SIZE: u32 = 256;
const VALUES_PER_LANDMARK: usize = 5; // x, y, z, visibility, presence

/// Single-subject 33-landmark pose estimator (BlazePose-style ONNX
/// model, 256x256 RGB input, landmark coordinates in input pixel space).
pub struct OnnxPosePipeline {
    session: Session,
}

impl OnnxPosePipeline {
    pub fn new(model_path: &str) -> Result<Self> {
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(4)?
            .with_execution_providers([
                ort::execution_providers::CoreMLExecutionProvider::default().build(),
                ort::execution_providers::CPUExecutionProvider::default().build(),
            ])?
            .commit_from_file(model_path)?;

        Ok(Self { session })
    }
}

impl PosePipeline for OnnxPosePipeline {
    fn name(&self) -> String {
        "Pose Landmarks (33 pts)".to_string()
    }

    fn process(&mut self, frame: &ImageBuffer<Rgb<u8>, Vec<u8>>) -> Result<Option<BodyLandmarks>> {
        // 1. Preprocess: letterbox-free resize to 256x256, NHWC, 0..1.
        let resized = image::imageops::resize(frame, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);
        let mut input_data = Vec::with_capacity((INPUT_SIZE * INPUT_SIZE * 3) as usize);
        for y in 0..INPUT_SIZE {
            for x in 0..INPUT_SIZE {
                let pixel = resized.get_pixel(x, y);
                input_data.push(pixel[0] as f32 / 255.0);
                input_data.push(pixel[1] as f32 / 255.0);
                input_data.push(pixel[2] as f32 / 255.0);
            }
        }

        let shape = vec![1, INPUT_SIZE as i64, INPUT_SIZE as i64, 3];
        let input = Tensor::from_array((shape, input_data))?;
        let outputs = self.session.run(ort::inputs![input])?;

        let (_output_shape, output_data) = outputs[0].try_extract_tensor::<f32>()?;

        Ok(landmarks_from_raw(output_data, INPUT_SIZE as f32))
    }
}

/// Decode the raw landmark tensor: 5 values per point, coordinates in
/// model input pixels, visibility and presence as logits. Normalizes
/// coordinates to 0..1 and squashes visibility through a sigmoid.
pub fn landmarks_from_raw(raw: &[f32], input_size: f32) -> Option<BodyLandmarks> {
    if raw.len() < li::COUNT * VALUES_PER_LANDMARK {
        return None;
    }

    let mut points = Vec::with_capacity(li::COUNT);
    for i in 0..li::COUNT {
        let base = i * VALUES_PER_LANDMARK;
        points.push(Landmark {
            x: raw[base] / input_size,
            y: raw[base + 1] / input_size,
            z: raw[base + 2] / input_size,
            visibility: sigmoid(raw[base + 3]),
        });
    }

    Some(BodyLandmarks { points })
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_output_decodes_to_none() {
        let raw = vec![0.0f32; 10];
        assert!(landmarks_from_raw(&raw, 256.0).is_none());
    }

    #[test]
    fn raw_landmarks_normalize_to_unit_coordinates() {
        let mut raw = vec![0.0f32; li::COUNT * VALUES_PER_LANDMARK];
        // Point 0 at (128, 64) with a strongly positive visibility logit.
        raw[0] = 128.0;
        raw[1] = 64.0;
        raw[3] = 10.0;
        let landmarks = landmarks_from_raw(&raw, 256.0).unwrap();
        assert_eq!(landmarks.points.len(), li::COUNT);
        assert!((landmarks.nose().x - 0.5).abs() < 1e-6);
        assert!((landmarks.nose().y - 0.25).abs() < 1e-6);
        assert!(landmarks.nose().visibility > 0.99);
    }

    #[test]
    fn sigmoid_is_centered_at_half() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-6);
        assert!(sigmoid(-10.0) < 0.01);
        assert!(sigmoid(10.0) > 0.99);
    }
}
