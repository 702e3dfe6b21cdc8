//! The numbered main menu.

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuChoice {
    ListAll,
    Search,
    FilterByGenre,
    Statistics,
    AddMovie,
    PreviewCsv,
    ExportCsv,
    Quit,
}

impl MenuChoice {
    /// Menu entries in display order; entry `i` is selected by typing `i + 1`.
    pub(crate) const ALL: [MenuChoice; 8] = [
        MenuChoice::ListAll,
        MenuChoice::Search,
        MenuChoice::FilterByGenre,
        MenuChoice::Statistics,
        MenuChoice::AddMovie,
        MenuChoice::PreviewCsv,
        MenuChoice::ExportCsv,
        MenuChoice::Quit,
    ];

    pub(crate) fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|&c| c == self)
            .map_or(0, |i| i + 1)
    }

    pub(crate) fn label(self) -> &'static str {
        match self {
            MenuChoice::ListAll => "List all movies",
            MenuChoice::Search => "Search by title",
            MenuChoice::FilterByGenre => "Filter by genre",
            MenuChoice::Statistics => "Show statistics",
            MenuChoice::AddMovie => "Add a movie",
            MenuChoice::PreviewCsv => "Preview CSV",
            MenuChoice::ExportCsv => "Export CSV to file",
            MenuChoice::Quit => "Quit",
        }
    }

    /// Parse a typed menu number. Surrounding whitespace is ignored.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}
