//! Local edit buffer behind one editable profile field.
//!
//! Nothing here is persisted: [`FieldEditor::save`] only replaces the value the
//! profile displays.

use crate::validate::FieldKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldEditor {
    kind: FieldKind,
    value: String,
    buffer: String,
    editing: bool,
}

impl FieldEditor {
    pub fn new(kind: FieldKind, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            kind,
            buffer: value.clone(),
            value,
            editing: false,
        }
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The committed value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        self.buffer = self.value.clone();
        self.editing = true;
    }

    /// Replace the buffer with the trimmed input.
    pub fn input(&mut self, text: &str) {
        self.buffer = text.trim().to_string();
    }

    /// Whether Save is enabled.
    pub fn can_save(&self) -> bool {
        self.kind.validate(&self.buffer)
    }

    /// Commit the buffer. Returns `false` and stays in edit mode when the buffer is
    /// invalid.
    pub fn save(&mut self) -> bool {
        if !self.can_save() {
            return false;
        }
        self.value = self.buffer.clone();
        self.editing = false;
        true
    }

    pub fn cancel(&mut self) {
        self.buffer = self.value.clone();
        self.editing = false;
    }

    /// Committed value formatted for display.
    pub fn display(&self) -> String {
        self.kind.display(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_valid_edit() {
        let mut e = FieldEditor::new(FieldKind::FullName, "Jane Doe");
        e.begin_edit();
        assert!(e.is_editing());
        e.input("  Jane Q. Public ");
        assert_eq!(e.buffer(), "Jane Q. Public");
        assert!(e.can_save());
        assert!(e.save());
        assert_eq!(e.value(), "Jane Q. Public");
        assert!(!e.is_editing());
    }

    #[test]
    fn test_invalid_buffer_blocks_save() {
        let mut e = FieldEditor::new(FieldKind::Ssn, "123456789");
        e.begin_edit();
        e.input("12345");
        assert!(!e.can_save());
        assert!(!e.save());
        assert!(e.is_editing());
        assert_eq!(e.value(), "123456789");
    }

    #[test]
    fn test_cancel_discards_buffer() {
        let mut e = FieldEditor::new(FieldKind::Email, "jane@doe.com");
        e.begin_edit();
        e.input("john@doe.com");
        e.cancel();
        assert_eq!(e.value(), "jane@doe.com");
        assert_eq!(e.buffer(), "jane@doe.com");
        assert!(!e.is_editing());
    }

    #[test]
    fn test_phone_display() {
        let e = FieldEditor::new(FieldKind::Phone, "5551234567");
        assert_eq!(e.display(), "(555) 123-4567");
        assert_eq!(e.kind(), FieldKind::Phone);
    }
}
