use serde::{Deserialize, Serialize};

/// One shell in the magazine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shell {
    Live,
    Blank,
}

impl Shell {
    #[must_use]
    pub const fn is_live(self) -> bool {
        matches!(self, Shell::Live)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Shell::Live => "live",
            Shell::Blank => "blank",
        }
    }
}

impl std::fmt::Display for Shell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
