use std::fmt;

/// Access level requested in the authorization URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Public data only.
    #[default]
    Public,
    /// Public and private data, including private activities.
    ViewPrivate,
    /// Public data plus upload and edit rights.
    Write,
    ViewPrivateWrite,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Public => "public",
            Scope::ViewPrivate => "view_private",
            Scope::Write => "write",
            Scope::ViewPrivateWrite => "view_private,write",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
