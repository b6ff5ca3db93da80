use crate::*;


pub(crate) fn pos(id: &str, label: &str) -> Position {
    Position {
        id: PositionId::new(id),
        label: label.to_string(),
    }
}

pub(crate) fn tech(
    id: &str,
    position: &str,
    category: Category,
    difficulty: Difficulty,
) -> Technique {
    Technique {
        id: TechniqueId::new(id),
        label: id.to_string(),
        position: PositionId::new(position),
        category,
        difficulty,
        steps: vec!["step one".to_string(), "step two".to_string()],
        target: None,
        counter_of: None,
    }
}

pub(crate) fn counter(id: &str, position: &str, difficulty: Difficulty, parent: &str) -> Technique {
    Technique {
        counter_of: Some(TechniqueId::new(parent)),
        ..tech(id, position, Category::Counter, difficulty)
    }
}

/// One position, one submission with two counters, one escape.
pub(crate) fn small_dataset() -> Dataset {
    Dataset::from_parts(
        vec![pos("mount", "Mount")],
        vec![
            tech("armbar", "mount", Category::Submission, Difficulty::Intermediate),
            tech("upa", "mount", Category::Escape, Difficulty::Basic),
            counter("stack", "mount", Difficulty::Basic, "armbar"),
            counter("roll", "mount", Difficulty::Intermediate, "armbar"),
        ],
    )
    .unwrap()
}
