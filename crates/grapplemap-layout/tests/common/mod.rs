#![allow(dead_code)]

use grapplemap_core::{
    Category, Dataset, Difficulty, Position, PositionId, Technique, TechniqueId,
};

pub fn pos(id: &str, label: &str) -> Position {
    Position {
        id: PositionId::new(id),
        label: label.to_string(),
    }
}

pub fn tech(id: &str, position: &str, category: Category, difficulty: Difficulty) -> Technique {
    Technique {
        id: TechniqueId::new(id),
        label: id.to_string(),
        position: PositionId::new(position),
        category,
        difficulty,
        steps: vec!["step".to_string()],
        target: None,
        counter_of: None,
    }
}

pub fn counter(id: &str, position: &str, parent: &str) -> Technique {
    Technique {
        counter_of: Some(TechniqueId::new(parent)),
        ..tech(id, position, Category::Counter, Difficulty::Basic)
    }
}

pub fn dataset(positions: Vec<Position>, techniques: Vec<Technique>) -> Dataset {
    Dataset::from_parts(positions, techniques).unwrap()
}
