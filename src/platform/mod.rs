// tabclip platform abstraction
// Identifies the host operating system and derives the clipboard line
// separator from it. The separator is picked once at startup and never
// renegotiated per call.

/// Host operating system identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Windows,
    MacOs,
    Linux,
}

/// Returns the operating system the crate was compiled for.
/// Non-Windows, non-macOS targets are treated as Linux.
pub fn current_os() -> Os {
    if cfg!(target_os = "windows") {
        Os::Windows
    } else if cfg!(target_os = "macos") {
        Os::MacOs
    } else {
        Os::Linux
    }
}

/// Line separator used when joining tab URLs into clipboard text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSeparator {
    CrLf,
    Lf,
}

impl LineSeparator {
    /// Windows gets `\r\n`, every other host `\n`.
    pub fn for_os(os: Os) -> Self {
        match os {
            Os::Windows => LineSeparator::CrLf,
            Os::MacOs | Os::Linux => LineSeparator::Lf,
        }
    }

    /// Separator for the OS this build targets.
    pub fn native() -> Self {
        Self::for_os(current_os())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LineSeparator::CrLf => "\r\n",
            LineSeparator::Lf => "\n",
        }
    }
}
