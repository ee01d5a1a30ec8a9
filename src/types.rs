/// A single body landmark in normalized image coordinates (0..1).
#[derive(Debug, Clone, Copy, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[allow(dead_code)]
    pub z: f32,
    pub visibility: f32,
}

/// Landmark indices for the 33-point full-body convention.
pub mod landmark_index {
    pub const NOSE: usize = 0;
    pub const LEFT_EYE: usize = 2;
    pub const RIGHT_EYE: usize = 5;
    pub const LEFT_EAR: usize = 7;
    pub const RIGHT_EAR: usize = 8;
    pub const LEFT_SHOULDER: usize = 11;
    pub const RIGHT_SHOULDER: usize = 12;
    pub const LEFT_ELBOW: usize = 13;
    pub const RIGHT_ELBOW: usize = 14;
    pub const LEFT_WRIST: usize = 15;
    pub const RIGHT_WRIST: usize = 16;
    pub const LEFT_HIP: usize = 23;
    pub const RIGHT_HIP: usize = 24;
    pub const LEFT_KNEE: usize = 25;
    pub const RIGHT_KNEE: usize = 26;
    pub const LEFT_ANKLE: usize = 27;
    pub const RIGHT_ANKLE: usize = 28;

    pub const COUNT: usize = 33;
}

/// One subject's landmark set for a single frame.
#[derive(Debug, Clone, Default)]
pub struct BodyLandmarks {
    pub points: Vec<Landmark>,
}

impl BodyLandmarks {
    /// Total accessor: out-of-range indices read as the default landmark,
    /// so a short landmark vector never panics downstream.
    pub fn point(&self, index: usize) -> Landmark {
        self.points.get(index).copied().unwrap_or_default()
    }

    pub fn nose(&self) -> Landmark {
        self.point(landmark_index::NOSE)
    }

    pub fn left_shoulder(&self) -> Landmark {
        self.point(landmark_index::LEFT_SHOULDER)
    }

    pub fn right_shoulder(&self) -> Landmark {
        self.point(landmark_index::RIGHT_SHOULDER)
    }

    pub fn left_hip(&self) -> Landmark {
        self.point(landmark_index::LEFT_HIP)
    }

    pub fn right_hip(&self) -> Landmark {
        self.point(landmark_index::RIGHT_HIP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_landmark_set_reads_as_default() {
        let lm = BodyLandmarks {
            points: vec![Landmark { x: 0.5, y: 0.5, z: 0.0, visibility: 1.0 }],
        };
        assert_eq!(lm.nose().x, 0.5);
        // Index 11 is missing; the accessor falls back to the default point.
        assert_eq!(lm.left_shoulder().x, 0.0);
        assert_eq!(lm.left_shoulder().visibility, 0.0);
    }
}
