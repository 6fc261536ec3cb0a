use crate::input;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Input type of a form field.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Tel,
    Email,
    TextArea,
    Select,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File {
        file_name: String,
        mime: Option<String>,
        data: Vec<u8>,
    },
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Whether the value counts as filled for required-field validation.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::File { file_name, data, .. } => file_name.is_empty() && data.is_empty(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub value: FieldValue,
    /// Value restored by [`Form::reset`].
    pub default: FieldValue,
    pub required: bool,
    /// Set by validation when a required field is blank.
    pub invalid: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: FieldValue::empty(),
            default: FieldValue::empty(),
            required: false,
            invalid: false,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        let value = FieldValue::Text(value.into());
        self.value = value.clone();
        self.default = value;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /// Set a typed value, applying the input filter of the field kind.
    pub fn set_value(&mut self, raw: &str) {
        let value = match self.kind {
            FieldKind::Number => input::filter_number(raw),
            FieldKind::Tel => input::mask_phone(raw),
            _ => raw.to_string(),
        };
        self.value = FieldValue::Text(value);
    }

    pub fn set_file(&mut self, file_name: impl Into<String>, mime: Option<String>, data: Vec<u8>) {
        self.value = FieldValue::File {
            file_name: file_name.into(),
            mime,
            data,
        };
    }

    /// Text shown next to a file input: the chosen file name, if any.
    pub fn file_label(&self) -> Option<&str> {
        match &self.value {
            FieldValue::File { file_name, .. } if !file_name.is_empty() => Some(file_name),
            _ => None,
        }
    }
}

/// The submit button of a form.
///
/// Cloning yields another handle to the same control, so the disabled state
/// can be observed while a submission is in flight.
#[derive(Debug, Clone, Default)]
pub struct SubmitControl {
    disabled: Arc<AtomicBool>,
}

impl SubmitControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.disabled.store(disabled, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    /// Declared action URL.
    pub action: Option<String>,
    pub fields: Vec<Field>,
    pub submit: Option<SubmitControl>,
    /// Text shown on success when no callback is supplied.
    pub success_message: Option<String>,
    /// Identifier of the enclosing dismissible overlay.
    pub popup: Option<String>,
}

impl Form {
    pub fn new(action: Option<String>) -> Self {
        Self {
            action,
            fields: Vec::new(),
            submit: Some(SubmitControl::new()),
            success_message: None,
            popup: None,
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub fn in_popup(mut self, id: impl Into<String>) -> Self {
        self.popup = Some(id.into());
        self
    }

    pub fn without_submit(mut self) -> Self {
        self.submit = None;
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Mark blank required fields invalid and return their names.
    ///
    /// Filled fields lose a previous invalid mark.
    pub fn check_validity(&mut self) -> Vec<String> {
        let mut missing = Vec::new();
        for field in &mut self.fields {
            field.invalid = field.required && field.value.is_blank();
            if field.invalid {
                tracing::trace!(field = %field.name, "required field is blank");
                missing.push(field.name.clone());
            }
        }
        missing
    }

    /// Restore every field to its default value.
    pub fn reset(&mut self) {
        tracing::debug!(fields = self.fields.len(), "resetting form");
        for field in &mut self.fields {
            field.value = field.default.clone();
            field.invalid = false;
        }
    }

    /// Named fields in document order, as they are sent to the server.
    pub fn entries(&self) -> Vec<(String, FieldValue)> {
        self.fields
            .iter()
            .filter(|f| !f.name.is_empty())
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }
}
