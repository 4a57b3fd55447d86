//! Parsed loot assignment submission.
//!
//! The mass input form submits up to [`MAX_ASSIGNMENT_ENTRIES`] rows of `item[i][...]` fields
//! plus a handful of batch wide options. [`AssignmentRequest::from_form`] performs every check
//! that does not need the database; references (raid, items) are checked by the
//! assignment service before anything is written.

use chrono::NaiveDate;

use crate::server::{
    error::validation::{FieldError, ValidationError},
    util::{form::IndexedForm, time::parse_receipt_date},
};

pub const MAX_ASSIGNMENT_ENTRIES: usize = 150;
pub const MAX_NOTE_LENGTH: usize = 140;
pub const MAX_IMPORT_ID_LENGTH: usize = 20;
pub const MAX_BATCH_NAME_LENGTH: usize = 75;

/// One row of the mass input form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentEntry {
    /// Position of the row in the submitted form
    pub index: usize,
    pub item_id: Option<i32>,
    pub character_id: Option<i32>,
    pub is_offspec: bool,
    pub note: Option<String>,
    pub officer_note: Option<String>,
    pub received_at: Option<NaiveDate>,
    pub import_id: Option<String>,
    /// Display name used in warnings, falls back to the item ID
    pub label: Option<String>,
}

impl AssignmentEntry {
    /// How the entry is named in failure warnings
    pub fn display_label(&self) -> String {
        match (&self.label, self.item_id) {
            (Some(label), _) => label.clone(),
            (None, Some(item_id)) => item_id.to_string(),
            (None, None) => format!("entry {}", self.index),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentRequest {
    pub entries: Vec<AssignmentEntry>,
    pub raid_id: Option<i32>,
    pub name: Option<String>,
    pub delete_wishlist_items: bool,
    pub delete_prio_items: bool,
    pub skip_missing_characters: bool,
}

/// Result of a committed assignment submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentOutcome {
    pub added: usize,
    pub failed: usize,
    pub warnings: Vec<String>,
    pub batch_id: i32,
}

impl AssignmentOutcome {
    /// `Successfully added N items. F failures[: warnings | .]`
    pub fn flash_message(&self) -> String {
        let mut message = format!(
            "Successfully added {} items. {} failures",
            self.added, self.failed
        );

        if self.warnings.is_empty() {
            message.push('.');
        } else {
            message.push_str(": ");
            message.push_str(&self.warnings.join(", "));
        }

        message
    }
}

impl AssignmentRequest {
    /// Validates the format of every submitted field, collecting all field errors.
    ///
    /// # Arguments
    /// - `form` - Parsed `item[i][...]` rows & batch options
    /// - `today` - Latest accepted receipt date
    ///
    /// # Returns
    /// - `Ok(AssignmentRequest)` - Every field is well formed
    /// - `Err(ValidationError::TooManyEntries)` - More rows than allowed were submitted
    /// - `Err(ValidationError::InvalidFields)` - One or more fields were rejected
    pub fn from_form(form: &IndexedForm, today: NaiveDate) -> Result<Self, ValidationError> {
        let rows = form.rows("item");
        if rows.len() > MAX_ASSIGNMENT_ENTRIES {
            return Err(ValidationError::TooManyEntries {
                submitted: rows.len(),
                max: MAX_ASSIGNMENT_ENTRIES,
            });
        }

        let mut errors = Vec::new();

        let raid_id = parse_id(form.field("raid_id"), "raid_id", &mut errors);
        let name = form.field("name").map(str::to_string);
        if let Some(name) = &name {
            check_length(name, MAX_BATCH_NAME_LENGTH, "name", &mut errors);
        }

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let i = row.index;
            let field = |name: &str| format!("item.{}.{}", i, name);

            let note = row.get("note").map(str::to_string);
            let officer_note = row.get("officer_note").map(str::to_string);
            let import_id = row.get("import_id").map(str::to_string);

            if let Some(note) = &note {
                check_length(note, MAX_NOTE_LENGTH, &field("note"), &mut errors);
            }
            if let Some(officer_note) = &officer_note {
                check_length(officer_note, MAX_NOTE_LENGTH, &field("officer_note"), &mut errors);
            }
            if let Some(import_id) = &import_id {
                check_length(import_id, MAX_IMPORT_ID_LENGTH, &field("import_id"), &mut errors);
            }

            let received_at = match row.get("received_at") {
                Some(value) => match parse_receipt_date(value, today) {
                    Ok(date) => Some(date),
                    Err(message) => {
                        errors.push(FieldError::new(field("received_at"), message));
                        None
                    }
                },
                None => None,
            };

            entries.push(AssignmentEntry {
                index: i,
                item_id: parse_id(row.get("id"), &field("id"), &mut errors),
                character_id: parse_id(row.get("character_id"), &field("character_id"), &mut errors),
                is_offspec: row.flag("is_offspec"),
                note,
                officer_note,
                received_at,
                import_id,
                label: row.get("label").map(str::to_string),
            });
        }

        ValidationError::check(errors)?;

        Ok(Self {
            entries,
            raid_id,
            name,
            delete_wishlist_items: form.flag("delete_wishlist_items"),
            delete_prio_items: form.flag("delete_prio_items"),
            skip_missing_characters: form.flag("skip_missing_characters"),
        })
    }

    /// Distinct item IDs referenced by the submission
    pub fn item_ids(&self) -> Vec<i32> {
        let mut ids: Vec<i32> = self.entries.iter().filter_map(|e| e.item_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

pub(crate) fn parse_id(value: Option<&str>, field: &str, errors: &mut Vec<FieldError>) -> Option<i32> {
    let value = value?;
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.push(FieldError::new(field, "must be a positive integer"));
            None
        }
    }
}

pub(crate) fn check_length(value: &str, max: usize, field: &str, errors: &mut Vec<FieldError>) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("may not be greater than {} characters", max),
        ));
    }
}
