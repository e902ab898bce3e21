pub mod board;
pub mod remote;
pub mod sorting;

pub use board::build_board;
pub use remote::RemoteState;
pub use sorting::{by_status, sort_columns};

/// One tracked work entry on the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Issue or pull request number, unique within `repo`
    pub id: u64,
    pub repo: String,
    pub name: String,
}

impl Item {
    pub fn new(id: u64, repo: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id,
            repo: repo.into(),
            name: name.into(),
        }
    }

    /// Heading shown on the item card, e.g. "cli #354"
    pub fn heading(&self) -> String {
        format!("{} #{}", self.repo, self.id)
    }
}

/// Items sharing one Status value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub items: Vec<Item>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    pub columns: Vec<Column>,
}

impl Board {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
