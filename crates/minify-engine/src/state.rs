//! Cross-line scanner state.

/// Where the scanner is at the start of a line.
///
/// A skip region takes precedence over an open comment; the comment state is
/// kept aside and restored when the region closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMode {
    #[default]
    Normal,
    InComment,
    InRegion { resume_comment: bool },
}

/// What a processed line did to the scanner state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    EnterRegion,
    LeaveRegion,
    /// Comment state at the end of the line.
    Comment(bool),
}

impl LineMode {
    pub fn in_comment(&self) -> bool {
        matches!(self, Self::InComment)
    }

    pub fn in_region(&self) -> bool {
        matches!(self, Self::InRegion { .. })
    }

    pub fn transition(self, event: LineEvent) -> Self {
        match (self, event) {
            (Self::InRegion { .. }, LineEvent::EnterRegion) => self,
            (Self::Normal, LineEvent::EnterRegion) => Self::InRegion { resume_comment: false },
            (Self::InComment, LineEvent::EnterRegion) => Self::InRegion { resume_comment: true },
            (Self::InRegion { resume_comment: true }, LineEvent::LeaveRegion) => Self::InComment,
            (Self::InRegion { resume_comment: false }, LineEvent::LeaveRegion) => Self::Normal,
            (_, LineEvent::LeaveRegion) => self,
            // region lines never reach the comment scanner
            (Self::InRegion { .. }, LineEvent::Comment(_)) => self,
            (_, LineEvent::Comment(true)) => Self::InComment,
            (_, LineEvent::Comment(false)) => Self::Normal,
        }
    }
}
