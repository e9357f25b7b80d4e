use std::fmt;

/// Ways a node handle can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The handle's node was already removed, or the handle was issued by a
    /// different list.
    InvalidHandle,

    /// The handle points at one of the permanent boundary sentinels.
    Sentinel,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::InvalidHandle => f.write_str("invalid or stale node handle"),
            ListError::Sentinel => f.write_str("sentinel nodes cannot be removed"),
        }
    }
}

impl std::error::Error for ListError {}
