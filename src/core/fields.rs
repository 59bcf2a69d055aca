//! Title + text pair edited in both the creation form and the edit overlay.

/// Which of the two fields receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Title,
    Text,
}

/// One editing step applied to the focused field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Paste(String),
    Backspace,
    NextField,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFields {
    pub title: String,
    pub text: String,
    pub focus: Field,
}

impl TextFields {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            focus: Field::Title,
        }
    }

    /// Anything other than whitespace typed into either field.
    pub fn has_content(&self) -> bool {
        !crate::core::note::is_blank(&self.title, &self.text)
    }

    /// The title is a single line: a newline moves focus to the text instead.
    pub fn apply(&mut self, edit: FieldEdit) {
        match (edit, self.focus) {
            (FieldEdit::NextField, Field::Title) | (FieldEdit::Insert('\n'), Field::Title) => {
                self.focus = Field::Text;
            }
            (FieldEdit::NextField, Field::Text) => self.focus = Field::Title,
            (FieldEdit::Insert(c), Field::Title) => self.title.push(c),
            (FieldEdit::Insert(c), Field::Text) => self.text.push(c),
            (FieldEdit::Paste(s), Field::Title) => {
                self.title.push_str(&s.replace(['\r', '\n'], " "));
            }
            (FieldEdit::Paste(s), Field::Text) => self.text.push_str(&s.replace('\r', "")),
            (FieldEdit::Backspace, Field::Title) => {
                self.title.pop();
            }
            (FieldEdit::Backspace, Field::Text) => {
                self.text.pop();
            }
        }
    }
}
