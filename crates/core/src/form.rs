//! Declarative input forms.
//!
//! A [`FormSpec`] lists the fields an action needs before it can build its git
//! arguments. [`run_form`] walks the fields strictly in declaration order
//! through a [`FieldPrompter`], which is the seam to whatever draws the
//! prompts. Cancelling any field cancels the whole form.

use indexmap::IndexMap;
use log::debug;

use crate::error::Result;

// Git paths never contain NUL, so these values cannot collide with a file.

/// Value of the pseudo-option meaning "every candidate".
pub const SELECT_ALL: &str = "\0select_all";
/// Value of the pseudo-option meaning "nothing".
pub const DESELECT_ALL: &str = "\0deselect_all";

/// Checks a text value, returning the message to show on rejection.
pub type Validator = fn(&str) -> std::result::Result<(), String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// An option whose label is its value.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextField {
    pub key: String,
    pub title: String,
    pub placeholder: Option<String>,
    pub validator: Option<Validator>,
    pub char_limit: Option<usize>,
    /// Used when the value is left blank.
    pub default: Option<String>,
}

impl TextField {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            placeholder: None,
            validator: None,
            char_limit: None,
            default: None,
        }
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    #[must_use]
    pub fn char_limit(mut self, char_limit: usize) -> Self {
        self.char_limit = Some(char_limit);
        self
    }

    #[must_use]
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Applies the character limit and the blank-value default.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        let limited: String = match self.char_limit {
            Some(limit) => raw.chars().take(limit).collect(),
            None => raw.to_string(),
        };

        match &self.default {
            Some(default) if limited.trim().is_empty() => default.clone(),
            _ => limited,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectField {
    pub key: String,
    pub title: String,
    pub options: Vec<SelectOption>,
}

impl SelectField {
    pub fn new(key: impl Into<String>, title: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            options,
        }
    }

    fn offers(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

#[derive(Debug, Clone)]
pub struct MultiSelectField {
    pub key: String,
    pub title: String,
    pub options: Vec<SelectOption>,
}

impl MultiSelectField {
    pub fn new(key: impl Into<String>, title: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            options,
        }
    }

    /// Puts the "select all" and "deselect all" pseudo-options ahead of the
    /// regular options.
    #[must_use]
    pub fn with_bulk_options(mut self) -> Self {
        let mut options = vec![
            SelectOption::new("Select all", SELECT_ALL),
            SelectOption::new("Deselect all", DESELECT_ALL),
        ];
        options.append(&mut self.options);
        self.options = options;
        self
    }

    /// Option values that are not pseudo-options, in option order.
    #[must_use]
    pub fn candidates(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|option| !is_pseudo_option(&option.value))
            .map(|option| option.value.clone())
            .collect()
    }

    /// Interprets a raw selection.
    ///
    /// The selection is first reduced to offered option values. `select_all`
    /// then wins over everything, `deselect_all` wins over explicit picks,
    /// and otherwise the picked candidates are returned in option order.
    #[must_use]
    pub fn resolve(&self, selected: &[String]) -> MultiSelection {
        let offered: Vec<&str> = self
            .options
            .iter()
            .map(|option| option.value.as_str())
            .filter(|value| selected.iter().any(|s| s == value))
            .collect();

        if offered.contains(&SELECT_ALL) {
            return MultiSelection::All(self.candidates());
        }

        if offered.contains(&DESELECT_ALL) {
            return MultiSelection::Cleared;
        }

        let mut picked: Vec<String> = Vec::new();
        for value in offered {
            if !picked.iter().any(|p| p == value) {
                picked.push(value.to_string());
            }
        }

        MultiSelection::Picked(picked)
    }
}

fn is_pseudo_option(value: &str) -> bool {
    value == SELECT_ALL || value == DESELECT_ALL
}

#[derive(Debug, Clone)]
pub struct ConfirmField {
    pub key: String,
    pub title: String,
    pub default: bool,
}

impl ConfirmField {
    pub fn new(key: impl Into<String>, title: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            default,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Field {
    Text(TextField),
    Select(SelectField),
    MultiSelect(MultiSelectField),
    Confirm(ConfirmField),
}

impl Field {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Field::Text(field) => &field.key,
            Field::Select(field) => &field.key,
            Field::MultiSelect(field) => &field.key,
            Field::Confirm(field) => &field.key,
        }
    }
}

/// Ordered fields to collect before an action proceeds.
#[derive(Debug, Clone, Default)]
pub struct FormSpec {
    pub fields: Vec<Field>,
}

impl FormSpec {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(mut self, field: TextField) -> Self {
        self.fields.push(Field::Text(field));
        self
    }

    #[must_use]
    pub fn select(mut self, field: SelectField) -> Self {
        self.fields.push(Field::Select(field));
        self
    }

    #[must_use]
    pub fn multi_select(mut self, field: MultiSelectField) -> Self {
        self.fields.push(Field::MultiSelect(field));
        self
    }

    #[must_use]
    pub fn confirm(mut self, field: ConfirmField) -> Self {
        self.fields.push(Field::Confirm(field));
        self
    }
}

/// A resolved multi-select answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiSelection {
    /// `select_all` was chosen; holds every candidate.
    All(Vec<String>),
    /// `deselect_all` was chosen.
    Cleared,
    /// Explicitly picked candidates, possibly none.
    Picked(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(String),
    Selection(MultiSelection),
    Confirmed(bool),
}

/// Values of a completed form, keyed by field key in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(IndexMap<String, FieldValue>);

impl FormValues {
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.0.insert(key.into(), value);
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Text of a text field, or the empty string if absent.
    #[must_use]
    pub fn text(&self, key: &str) -> &str {
        match self.0.get(key) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    #[must_use]
    pub fn choice(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(FieldValue::Choice(choice)) => Some(choice),
            _ => None,
        }
    }

    #[must_use]
    pub fn selection(&self, key: &str) -> Option<&MultiSelection> {
        match self.0.get(key) {
            Some(FieldValue::Selection(selection)) => Some(selection),
            _ => None,
        }
    }

    #[must_use]
    pub fn confirmed(&self, key: &str) -> bool {
        matches!(self.0.get(key), Some(FieldValue::Confirmed(true)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Completed(FormValues),
    Cancelled,
}

/// The answer to a single prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Cancelled,
}

/// Asks the user for one field at a time.
///
/// Each method blocks until the user answers or aborts.
pub trait FieldPrompter {
    /// `previous` holds the rejected value and the validator's message when
    /// the field is asked again.
    fn prompt_text(
        &mut self,
        field: &TextField,
        previous: Option<(&str, &str)>,
    ) -> Result<Prompted<String>>;

    fn prompt_select(&mut self, field: &SelectField) -> Result<Prompted<String>>;

    /// Returns the raw selected option values, pseudo-options included.
    fn prompt_multi_select(&mut self, field: &MultiSelectField) -> Result<Prompted<Vec<String>>>;

    fn prompt_confirm(&mut self, field: &ConfirmField) -> Result<Prompted<bool>>;
}

/// Runs a form to completion or cancellation.
///
/// # Errors
///
/// Returns an error only if the prompter fails, for example on terminal I/O.
pub fn run_form<P: FieldPrompter + ?Sized>(prompter: &mut P, form: &FormSpec) -> Result<FormOutcome> {
    let mut values = FormValues::default();

    for field in &form.fields {
        debug!("Prompting for field `{}`", field.key());

        let value = match field {
            Field::Text(text_field) => prompt_valid_text(prompter, text_field)?.map(FieldValue::Text),
            Field::Select(select_field) => {
                prompt_valid_choice(prompter, select_field)?.map(FieldValue::Choice)
            }
            Field::MultiSelect(multi_field) => match prompter.prompt_multi_select(multi_field)? {
                Prompted::Value(selected) => {
                    Some(FieldValue::Selection(multi_field.resolve(&selected)))
                }
                Prompted::Cancelled => None,
            },
            Field::Confirm(confirm_field) => match prompter.prompt_confirm(confirm_field)? {
                Prompted::Value(confirmed) => Some(FieldValue::Confirmed(confirmed)),
                Prompted::Cancelled => None,
            },
        };

        let Some(value) = value else {
            debug!("Form cancelled at field `{}`", field.key());
            return Ok(FormOutcome::Cancelled);
        };

        values.insert(field.key(), value);
    }

    Ok(FormOutcome::Completed(values))
}

fn prompt_valid_text<P: FieldPrompter + ?Sized>(
    prompter: &mut P,
    field: &TextField,
) -> Result<Option<String>> {
    let mut rejected: Option<(String, String)> = None;

    loop {
        let previous = rejected
            .as_ref()
            .map(|(value, message)| (value.as_str(), message.as_str()));

        let raw = match prompter.prompt_text(field, previous)? {
            Prompted::Value(raw) => raw,
            Prompted::Cancelled => return Ok(None),
        };

        let value = field.normalize(&raw);

        match field.validator.map(|validate| validate(&value)) {
            Some(Err(message)) => {
                debug!("Field `{}` rejected: {message}", field.key);
                rejected = Some((value, message));
            }
            _ => return Ok(Some(value)),
        }
    }
}

fn prompt_valid_choice<P: FieldPrompter + ?Sized>(
    prompter: &mut P,
    field: &SelectField,
) -> Result<Option<String>> {
    if field.options.is_empty() {
        debug!("Field `{}` has no options to choose from", field.key);
        return Ok(None);
    }

    loop {
        match prompter.prompt_select(field)? {
            Prompted::Value(choice) if field.offers(&choice) => return Ok(Some(choice)),
            Prompted::Value(choice) => debug!("`{choice}` is not an option of `{}`", field.key),
            Prompted::Cancelled => return Ok(None),
        }
    }
}
