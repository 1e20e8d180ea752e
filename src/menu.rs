//! Main menu choices for the console shell.

/// A top-level menu selection, numbered from 1.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumIter,
    strum::FromRepr,
)]
#[repr(i32)]
pub enum MenuChoice {
    /// Start a best-of-N match.
    #[strum(to_string = "Play a match")]
    PlayMatch = 1,

    /// Reconfigure the player symbols.
    #[strum(to_string = "Change player symbols")]
    ChangeSymbols = 2,

    /// Leave the program.
    #[strum(to_string = "Quit")]
    Quit = 3,
}

impl MenuChoice {
    /// Renders the numbered menu body.
    pub fn menu_text() -> String {
        use strum::IntoEnumIterator;

        let mut out = String::new();
        for choice in Self::iter() {
            out.push_str(&format!("{}) {}\n", choice as i32, choice));
        }
        out.push_str("Choose an option:");
        out
    }

    /// Parses a menu number.
    pub fn parse(choice: i32) -> Result<Self, MenuError> {
        Self::from_repr(choice).ok_or(MenuError::InvalidMenuChoice(choice))
    }
}

/// Why a menu selection was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MenuError {
    /// The number does not name a menu entry.
    #[display("{} is not a menu option", _0)]
    InvalidMenuChoice(i32),
}

impl std::error::Error for MenuError {}
