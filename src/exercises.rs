/// Static exercise catalog shown in the Instant Exercises screens.
/// No external source and no write path.
#[derive(Debug, Clone, Copy)]
pub struct Exercise {
    pub category: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub image_path: &'static str,
}

pub const CATALOG: [Exercise; 2] = [
    Exercise {
        category: "Neck Pain Relief",
        name: "Neck Stretch",
        description: "Gently tilt your head to one side, bringing your ear toward \
                      your shoulder. Hold for 15 seconds and switch sides.",
        image_path: "assets/neck_stretch.jpg",
    },
    Exercise {
        category: "Back Pain Relief",
        name: "Back Pain Pose",
        description: "Kneel on the floor and stretch your arms forward, lowering \
                      your chest to your knees. Hold for 20 seconds.",
        image_path: "assets/back_pain_pose.jpg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entries_are_complete() {
        for exercise in CATALOG {
            assert!(!exercise.category.is_empty());
            assert!(!exercise.name.is_empty());
            assert!(!exercise.description.is_empty());
            assert!(!exercise.image_path.is_empty());
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in CATALOG.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }
}
