//! # Conditions
//!
//! Everything a key handler can raise. Recoverable conditions are shown on
//! the notice overlay and the loop carries on; the terminal one (`Quit`)
//! stops the loop.

use std::fmt;

use crate::catalog::CatalogError;
use crate::core::viewport::Boundary;

#[derive(Debug)]
pub enum Condition {
    /// Single step up from the first line.
    TopOfList,
    /// Single step down from the last line.
    EndOfList,
    /// Enter pressed on a pane that has nothing to drill into.
    ActivationUnsupported,
    /// Alt combination the focused pane doesn't know.
    UnknownCombination(char),
    /// Key with no binding.
    UnknownKeybinding(String),
    /// Pop requested with a single layout on the stack.
    AlreadyAtTop,
    /// The catalog lookup behind a drill-down failed.
    Catalog(CatalogError),
    /// Stop the event loop.
    Quit,
}

impl Condition {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Condition::Quit)
    }
}

impl From<Boundary> for Condition {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Top => Condition::TopOfList,
            Boundary::End => Condition::EndOfList,
        }
    }
}

impl From<CatalogError> for Condition {
    fn from(e: CatalogError) -> Self {
        Condition::Catalog(e)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::TopOfList => write!(f, "Top of the list"),
            Condition::EndOfList => write!(f, "End of the list"),
            Condition::ActivationUnsupported => write!(f, "Nothing to open here"),
            Condition::UnknownCombination(key) => {
                write!(f, "Unknown combination: alt-{key}")
            }
            Condition::UnknownKeybinding(name) => write!(f, "Unknown keybinding: {name}"),
            Condition::AlreadyAtTop => write!(f, "Already at the top level"),
            Condition::Catalog(e) => write!(f, "Library error: {e}"),
            Condition::Quit => write!(f, "quit"),
        }
    }
}

impl std::error::Error for Condition {}
