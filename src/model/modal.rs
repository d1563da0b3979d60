//! Modal stack for managing overlays
//!
//! A single enum-based stack instead of per-dialog boolean flags. While any
//! modal is on the stack it owns input and the page behind it stops
//! scrolling.

/// Represents a modal overlay displayed on top of the page
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Case-study detail view for a catalog index
    ProjectDetail { index: usize },
    /// Keyboard shortcut reference
    Help,
    /// Quit confirmation dialog
    QuitConfirm,
}

/// A stack of modal overlays
///
/// Only the top modal receives input events.
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal; popping an empty stack is a no-op
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::ProjectDetail { index: 1 });
        assert_eq!(stack.top(), Some(&Modal::ProjectDetail { index: 1 }));

        stack.push(Modal::Help);
        assert_eq!(stack.pop(), Some(Modal::Help));
        assert_eq!(stack.pop(), Some(Modal::ProjectDetail { index: 1 }));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_when_empty_is_noop() {
        let mut stack = ModalStack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }
}
