use super::Command;
use crate::document::Document;

/// Linear undo/redo history over committed [`Command`]s.
///
/// The top of `undo_stack` is the action that produced the document as it is
/// shown now. Committing anything new discards the redo branch.
#[derive(Debug, Default)]
pub struct CommandHistory {
    /// Stack of commands that can be undone
    undo_stack: Vec<Command>,
    /// Stack of commands that can be redone
    redo_stack: Vec<Command>,
}

impl CommandHistory {
    /// Creates a new empty command history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an already-applied command as the new history point.
    pub fn commit(&mut self, command: Command) {
        log::debug!("Commit {:?}", command);
        self.undo_stack.push(command);
        self.redo_stack.clear(); // Clear redo stack when new command is executed
    }

    /// Apply a command to the document and commit it.
    pub fn execute(&mut self, command: Command, document: &mut Document) {
        command.execute(document);
        self.commit(command);
    }

    /// Step back one history point. Returns `false` when there is nothing to undo.
    ///
    /// Undoing the oldest remaining action hits the floor of history: the
    /// document is reset to blank rather than reverted.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        let Some(command) = self.undo_stack.pop() else {
            return false;
        };

        if self.undo_stack.is_empty() {
            document.take();
        } else {
            command.undo(document);
        }
        self.redo_stack.push(command);
        true
    }

    /// Re-apply the most recently undone command. Returns `false` when there is
    /// nothing to redo.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        let Some(command) = self.redo_stack.pop() else {
            return false;
        };

        command.execute(document);
        self.undo_stack.push(command);
        true
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_stack(&self) -> &[Command] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Command] {
        &self.redo_stack
    }
}
