/// Board mode: editable or read-only (share-safe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Edit,
    View,
}

impl Mode {
    /// Value of the `mode` query parameter for this mode (None for Edit)
    pub fn query_value(&self) -> Option<&'static str> {
        match self {
            Mode::Edit => None,
            Mode::View => Some("view"),
        }
    }

    /// Parse the `mode` query parameter; only "view" selects View
    pub fn from_query_value(value: Option<&str>) -> Self {
        match value {
            Some("view") => Mode::View,
            _ => Mode::Edit,
        }
    }

    /// The mode a toggle switches to
    pub fn other(&self) -> Self {
        match self {
            Mode::Edit => Mode::View,
            Mode::View => Mode::Edit,
        }
    }

    /// Status label shown next to the indicator
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Edit => "Edit mode",
            Mode::View => "View mode",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, Mode::View)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    ConfirmDelete, // Waiting for y/n on a pending delete
    Alert,         // Blocking validation message
}

/// Field of the add-task form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Date,
    Text,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Date => FormField::Text,
            FormField::Text => FormField::Date,
        }
    }
}
