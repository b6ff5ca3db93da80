pub type Result<T> = std::result::Result<T, Error>;

/// Dataset validation errors. These are the only fallible operations in the
/// engine: interaction commands are defined as no-ops or clamps, never
/// failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid dataset JSON: {message}")]
    InvalidDatasetJson { message: String },

    #[error("Duplicate position id: {id}")]
    DuplicatePositionId { id: String },

    #[error("Duplicate technique id: {id}")]
    DuplicateTechniqueId { id: String },

    #[error("Technique \"{technique}\" originates from unknown position \"{position}\"")]
    UnknownOriginPosition { technique: String, position: String },

    #[error("Technique \"{technique}\" transitions to unknown position \"{position}\"")]
    UnknownTargetPosition { technique: String, position: String },

    #[error("Counter \"{counter}\" references unknown parent technique \"{parent}\"")]
    UnknownCounterParent { counter: String, parent: String },

    #[error("Technique \"{technique}\" has category `counter` but names no countered technique")]
    CounterWithoutParent { technique: String },

    #[error("Technique \"{technique}\" counters another technique but its category is not `counter`")]
    NonCounterWithParent { technique: String },
}
