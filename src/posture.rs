use crate::types::BodyLandmarks;

// Geometric thresholds in normalized image coordinates.
pub const FORWARD_THRESHOLD: f32 = 0.15;
pub const SHOULDER_ALIGNMENT_THRESHOLD: f32 = 0.05;
pub const NECK_HEIGHT_THRESHOLD: f32 = 0.2;

/// Slouch classification for one frame. Exactly one variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlouchCategory {
    #[default]
    None,
    ForwardSlouch,
    ShouldersMisaligned,
    NeckDown,
}

impl SlouchCategory {
    pub fn is_slouching(self) -> bool {
        self != SlouchCategory::None
    }

    /// Fixed advisory per category. `None` has no advisory by design:
    /// returning to good posture must not notify.
    pub fn advice(self) -> Option<&'static str> {
        match self {
            SlouchCategory::ForwardSlouch => {
                Some("Tip: Keep your neck aligned with your shoulders to avoid forward slouching.")
            }
            SlouchCategory::ShouldersMisaligned => {
                Some("Tip: Keep shoulders at the same height to avoid slouching.")
            }
            SlouchCategory::NeckDown => {
                Some("Tip: Keep your neck upright to maintain good posture.")
            }
            SlouchCategory::None => None,
        }
    }
}

/// Classify a landmark set against the fixed thresholds.
///
/// The nose stands in for the neck position. Total over any input:
/// coordinates are not range-checked and the function cannot fail.
/// First matching rule wins.
pub fn classify(landmarks: &BodyLandmarks) -> SlouchCategory {
    let nose = landmarks.nose();
    let left_shoulder = landmarks.left_shoulder();
    let right_shoulder = landmarks.right_shoulder();
    let left_hip = landmarks.left_hip();
    let right_hip = landmarks.right_hip();

    let shoulder_center_x = (left_shoulder.x + right_shoulder.x) / 2.0;
    let forward_head = (nose.x - shoulder_center_x).abs() > FORWARD_THRESHOLD;

    let shoulders_aligned =
        (left_shoulder.y - right_shoulder.y).abs() < SHOULDER_ALIGNMENT_THRESHOLD;

    let hips_center_y = (left_hip.y + right_hip.y) / 2.0;
    let neck_too_low = nose.y > hips_center_y - NECK_HEIGHT_THRESHOLD;

    if forward_head && neck_too_low {
        SlouchCategory::ForwardSlouch
    } else if !shoulders_aligned {
        SlouchCategory::ShouldersMisaligned
    } else if neck_too_low {
        SlouchCategory::NeckDown
    } else {
        SlouchCategory::None
    }
}

/// Tracks the previously emitted category so notifications fire on
/// transitions rather than every frame. Written only from the detection
/// worker thread; never persisted.
pub struct PostureMonitor {
    last: SlouchCategory,
}

impl PostureMonitor {
    pub fn new() -> Self {
        Self { last: SlouchCategory::None }
    }

    /// Record the category computed for the current frame. Returns the
    /// advisory to show when the category changed to a slouching one.
    /// State always updates, so leaving a slouch resets the monitor
    /// without emitting anything.
    pub fn update(&mut self, category: SlouchCategory) -> Option<&'static str> {
        let changed = category != self.last;
        self.last = category;
        if changed {
            category.advice()
        } else {
            None
        }
    }

    pub fn last(&self) -> SlouchCategory {
        self.last
    }
}

impl Default for PostureMonitor {
    fn default() -> Self {
        Self::new()
    }
}
