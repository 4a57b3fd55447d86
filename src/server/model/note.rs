//! Parsed note/priority edits.

use crate::server::{
    error::validation::{FieldError, ValidationError},
    model::assignment::{check_length, parse_id, MAX_NOTE_LENGTH},
    util::form::IndexedForm,
};

/// Note & priority text for one item, `None` clears the value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteEdit {
    pub item_id: i32,
    pub note: Option<String>,
    pub priority: Option<String>,
}

impl NoteEdit {
    /// Parses the single item note form (`id`, `note`, `priority`)
    pub fn from_form(form: &IndexedForm) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let item_id = parse_id(form.field("id"), "id", &mut errors);
        if item_id.is_none() && form.field("id").is_none() {
            errors.push(FieldError::new("id", "is required"));
        }

        let note = form.field("note").map(str::to_string);
        let priority = form.field("priority").map(str::to_string);
        check_optional(&note, "note", &mut errors);
        check_optional(&priority, "priority", &mut errors);

        ValidationError::check(errors)?;

        Ok(Self {
            item_id: item_id.unwrap_or_default(),
            note,
            priority,
        })
    }

    /// Parses the bulk editor's `items[i][id|note|priority]` rows, rows without an ID are skipped
    pub fn many_from_form(form: &IndexedForm) -> Result<Vec<Self>, ValidationError> {
        let mut errors = Vec::new();
        let mut edits = Vec::new();

        for row in form.rows("items") {
            let i = row.index;
            let field = |name: &str| format!("items.{}.{}", i, name);

            let Some(item_id) = parse_id(row.get("id"), &field("id"), &mut errors) else {
                continue;
            };

            let note = row.get("note").map(str::to_string);
            let priority = row.get("priority").map(str::to_string);
            check_optional(&note, &field("note"), &mut errors);
            check_optional(&priority, &field("priority"), &mut errors);

            edits.push(Self {
                item_id,
                note,
                priority,
            });
        }

        ValidationError::check(errors)?;

        Ok(edits)
    }

    pub fn is_blank(&self) -> bool {
        self.note.is_none() && self.priority.is_none()
    }
}

fn check_optional(value: &Option<String>, field: &str, errors: &mut Vec<FieldError>) {
    if let Some(value) = value {
        check_length(value, MAX_NOTE_LENGTH, field, errors);
    }
}
