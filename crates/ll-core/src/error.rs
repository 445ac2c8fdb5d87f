use crate::item::ToolKind;

/// Alias for `Result<T, LodgeError>`.
pub type LodgeResult<T> = Result<T, LodgeError>;

/// Errors that can occur when addressing lodge content.
#[derive(Debug, thiserror::Error)]
pub enum LodgeError {
    /// A raw room index outside the six rooms of the lodge.
    #[error("room index out of range: {0} (the lodge has 6 rooms)")]
    RoomOutOfRange(usize),

    /// A tool kind that has no entry in the tool table.
    #[error("tool not in the lodge: {0:?}")]
    ToolMissing(ToolKind),
}
