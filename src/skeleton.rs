use crate::draw;
use crate::types::{landmark_index as li, BodyLandmarks};

/// Landmark index pairs that form the drawn skeleton (33-point
/// convention): face, shoulder girdle, arms, torso, legs.
pub const POSE_CONNECTIONS: [[usize; 2]; 16] = [
    [li::NOSE, li::LEFT_EYE],
    [li::NOSE, li::RIGHT_EYE],
    [li::LEFT_EYE, li::LEFT_EAR],
    [li::RIGHT_EYE, li::RIGHT_EAR],
    [li::LEFT_SHOULDER, li::RIGHT_SHOULDER],
    [li::LEFT_SHOULDER, li::LEFT_ELBOW],
    [li::RIGHT_SHOULDER, li::RIGHT_ELBOW],
    [li::LEFT_ELBOW, li::LEFT_WRIST],
    [li::RIGHT_ELBOW, li::RIGHT_WRIST],
    [li::LEFT_SHOULDER, li::LEFT_HIP],
    [li::RIGHT_SHOULDER, li::RIGHT_HIP],
    [li::LEFT_HIP, li::RIGHT_HIP],
    [li::LEFT_HIP, li::LEFT_KNEE],
    [li::RIGHT_HIP, li::RIGHT_KNEE],
    [li::LEFT_KNEE, li::LEFT_ANKLE],
    [li::RIGHT_KNEE, li::RIGHT_ANKLE],
];

const VISIBILITY_THRESHOLD: f32 = 0.5;
const BONE_COLOR: draw::Color = (0, 255, 0);
const JOINT_COLOR: draw::Color = (255, 0, 0);

/// Render the landmark skeleton onto an RGB8 frame buffer. Landmark
/// coordinates are normalized, so they scale by the frame dimensions.
pub fn draw_skeleton(buffer: &mut [u8], width: usize, height: usize, landmarks: &BodyLandmarks) {
    let to_px = |idx: usize| {
        let p = landmarks.point(idx);
        (p.x * width as f32, p.y * height as f32, p.visibility)
    };

    for [a, b] in POSE_CONNECTIONS {
        let (ax, ay, av) = to_px(a);
        let (bx, by, bv) = to_px(b);
        if av < VISIBILITY_THRESHOLD || bv < VISIBILITY_THRESHOLD {
            continue;
        }
        draw::draw_line(buffer, width, height, ax, ay, bx, by, BONE_COLOR);
    }

    for (idx, p) in landmarks.points.iter().enumerate() {
        if p.visibility < VISIBILITY_THRESHOLD || idx >= li::COUNT {
            continue;
        }
        let x = (p.x * width as f32) as i32;
        let y = (p.y * height as f32) as i32;
        draw::draw_dot(buffer, width, height, x, y, 5, JOINT_COLOR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Landmark;

    #[test]
    fn connections_stay_within_the_landmark_range() {
        for [a, b] in POSE_CONNECTIONS {
            assert!(a < li::COUNT);
            assert!(b < li::COUNT);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn invisible_landmarks_are_not_drawn() {
        let mut points = vec![Landmark::default(); li::COUNT];
        points[li::LEFT_SHOULDER] = Landmark { x: 0.5, y: 0.5, z: 0.0, visibility: 0.1 };
        let landmarks = BodyLandmarks { points };

        let mut buffer = vec![0u8; 20 * 20 * 3];
        draw_skeleton(&mut buffer, 20, 20, &landmarks);
        assert!(buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn visible_skeleton_marks_the_buffer() {
        let mut points = vec![Landmark::default(); li::COUNT];
        for idx in [li::LEFT_SHOULDER, li::RIGHT_SHOULDER] {
            points[idx] = Landmark { x: 0.5, y: 0.5, z: 0.0, visibility: 1.0 };
        }
        let landmarks = BodyLandmarks { points };

        let mut buffer = vec![0u8; 20 * 20 * 3];
        draw_skeleton(&mut buffer, 20, 20, &landmarks);
        assert!(buffer.iter().any(|&b| b != 0));
    }
}
