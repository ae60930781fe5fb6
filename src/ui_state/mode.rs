/// What the listing area is showing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Browse,
    Search,
    Random,
    Quit,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Browse => write!(f, "browse"),
            Mode::Search => write!(f, "search"),
            Mode::Random => write!(f, "random"),
            Mode::Quit => write!(f, "quit"),
        }
    }
}
