//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// One of a fixed option list; `None` means nothing selected yet
    Select {
        options: &'static [&'static str],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: String,
    pub value: FieldValue,
    pub is_multiline: bool,
    /// Restrict keyboard input to phone-style characters (digits, +, -, space, parens)
    pub phone_input: bool,
    /// Restrict keyboard input to digits
    pub numeric_input: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &str, is_multiline: bool) -> Self {
        Self {
            name,
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_multiline,
            phone_input: false,
            numeric_input: false,
        }
    }

    /// Create a new phone field (text that only accepts dialable characters)
    pub fn phone(name: &'static str, label: &str) -> Self {
        Self {
            phone_input: true,
            ..Self::text(name, label, false)
        }
    }

    /// Create a new digits-only field
    pub fn numeric(name: &'static str, label: &str) -> Self {
        Self {
            numeric_input: true,
            ..Self::text(name, label, false)
        }
    }

    /// Create a new select field with nothing chosen
    pub fn select(name: &'static str, label: &str, options: &'static [&'static str]) -> Self {
        Self {
            name,
            label: label.to_string(),
            value: FieldValue::Select {
                options,
                selected: None,
            },
            is_multiline: false,
            phone_input: false,
            numeric_input: false,
        }
    }

    /// Get the text value (the selected option name for select fields,
    /// empty string when nothing is selected)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select { options, selected } => {
                (*selected).map(|i| options[i]).unwrap_or("")
            }
        }
    }

    /// Push a character to the field value, honoring input restrictions
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => {
                if self.numeric_input && !c.is_ascii_digit() {
                    return;
                }
                if self.phone_input
                    && !(c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')'))
                {
                    return;
                }
                s.push(c);
            }
            FieldValue::Select { .. } => {
                // Select fields are driven by next/prev_option
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Select { selected, .. } => {
                *selected = None;
            }
        }
    }

    /// Advance a select field to the next option (wraps past the end)
    pub fn next_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = Some(match *selected {
                None => 0,
                Some(i) => (i + 1) % options.len(),
            });
        }
    }

    /// Move a select field to the previous option (wraps before the start)
    pub fn prev_option(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            *selected = Some(match *selected {
                None => options.len() - 1,
                Some(0) => options.len() - 1,
                Some(i) => i - 1,
            });
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select { selected, .. } => *selected = None,
        }
    }

    /// Whether this field is a fixed-option select
    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select { .. })
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { options, selected } => match selected {
                Some(i) => options[*i].to_string(),
                None => format!("◂ select {} ▸", self.label.to_lowercase()),
            },
        }
    }
}
