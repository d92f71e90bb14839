use std::fmt;

/// Where the markup for the current view was produced.
///
/// Purely informational: pages interpolate it into their headings, nothing
/// branches on it.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Markup produced on the server before the response is sent.
    Ssr,
    /// Markup produced in the browser after script execution.
    #[default]
    Csr,
}

impl RenderMode {
    /// The literal text interpolated into page headings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ssr => "SSR",
            Self::Csr => "CSR",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
