//! Yes/no confirmation dialog state
//!
//! Destructive operations route through this dialog; the accept message is
//! carried on the dialog itself so the key handler stays generic.

use crate::message::Message;

/// Which dialog button is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Yes,
    No,
}

impl ConfirmChoice {
    pub fn toggled(self) -> Self {
        match self {
            ConfirmChoice::Yes => ConfirmChoice::No,
            ConfirmChoice::No => ConfirmChoice::Yes,
        }
    }
}

/// State for a modal yes/no dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub body: String,
    /// Message emitted when the user confirms
    pub accept: Message,
    pub selected: ConfirmChoice,
}

impl ConfirmDialogState {
    pub fn new(title: impl Into<String>, body: impl Into<String>, accept: Message) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            accept,
            // Default to the safe option
            selected: ConfirmChoice::No,
        }
    }

    pub fn toggle_selection(&mut self) {
        self.selected = self.selected.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_defaults_to_no() {
        let dialog = ConfirmDialogState::new(
            "Delete recipe",
            "Remove this recipe from your collection?",
            Message::ConfirmDeleteRecipe {
                recipe_id: "r1".to_string(),
            },
        );
        assert_eq!(dialog.selected, ConfirmChoice::No);
    }

    #[test]
    fn test_toggle_selection() {
        let mut dialog =
            ConfirmDialogState::new("t", "b", Message::DialogDismissed);
        dialog.toggle_selection();
        assert_eq!(dialog.selected, ConfirmChoice::Yes);
        dialog.toggle_selection();
        assert_eq!(dialog.selected, ConfirmChoice::No);
    }
}
