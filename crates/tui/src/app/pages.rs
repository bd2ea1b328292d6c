//! Screen state mounted for each route.
use api_types::pagination::DateRange;
use chrono::NaiveDate;
use client::{
    forms::{Field, FieldErrors, LoginForm, SignupForm},
    pages::{Dashboard, TransactionDetail, TransactionEditor, TransactionList},
};

pub const LOGIN_FIELDS: &[Field] = &[Field::Email, Field::Password];
pub const SIGNUP_FIELDS: &[Field] = &[
    Field::Name,
    Field::Email,
    Field::Password,
    Field::ConfirmPassword,
];
pub const TRANSACTION_FIELDS: &[Field] = &[
    Field::Title,
    Field::Description,
    Field::Value,
    Field::TransactionDate,
];

/// Which input of a form has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormFocus {
    fields: &'static [Field],
    index: usize,
}

impl FormFocus {
    pub fn new(fields: &'static [Field]) -> Self {
        Self { fields, index: 0 }
    }

    pub fn current(&self) -> Field {
        self.fields[self.index]
    }

    pub fn is(&self, field: Field) -> bool {
        self.current() == field
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.fields.len();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.fields.len() - 1) % self.fields.len();
    }
}

#[derive(Debug)]
pub struct LoginPage {
    pub form: LoginForm,
    pub errors: FieldErrors,
    pub focus: FormFocus,
    /// Success notice carried over from signup.
    pub flash: Option<String>,
}

impl LoginPage {
    pub fn new(flash: Option<String>) -> Self {
        Self {
            form: LoginForm::default(),
            errors: FieldErrors::default(),
            focus: FormFocus::new(LOGIN_FIELDS),
            flash,
        }
    }

    pub fn input_mut(&mut self) -> &mut String {
        match self.focus.current() {
            Field::Password => &mut self.form.password,
            _ => &mut self.form.email,
        }
    }
}

#[derive(Debug)]
pub struct SignupPage {
    pub form: SignupForm,
    pub errors: FieldErrors,
    pub focus: FormFocus,
}

impl SignupPage {
    pub fn new() -> Self {
        Self {
            form: SignupForm::default(),
            errors: FieldErrors::default(),
            focus: FormFocus::new(SIGNUP_FIELDS),
        }
    }

    pub fn input_mut(&mut self) -> &mut String {
        match self.focus.current() {
            Field::Name => &mut self.form.name,
            Field::Password => &mut self.form.password,
            Field::ConfirmPassword => &mut self.form.confirm_password,
            _ => &mut self.form.email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Start,
    End,
}

/// Inline editor for the list's date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEditor {
    pub start: String,
    pub end: String,
    pub focus: FilterField,
    pub error: Option<&'static str>,
}

impl FilterEditor {
    pub fn from_range(range: &DateRange) -> Self {
        let fmt = |date: Option<NaiveDate>| {
            date.map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        };
        Self {
            start: fmt(range.start_date),
            end: fmt(range.end_date),
            focus: FilterField::Start,
            error: None,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FilterField::Start => FilterField::End,
            FilterField::End => FilterField::Start,
        };
    }

    pub fn input_mut(&mut self) -> &mut String {
        match self.focus {
            FilterField::Start => &mut self.start,
            FilterField::End => &mut self.end,
        }
    }

    /// Blank inputs leave that side of the range open.
    pub fn parse(&self) -> Result<DateRange, &'static str> {
        let parse = |raw: &str| {
            let raw = raw.trim();
            if raw.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map(Some)
                .map_err(|_| "Date must be in YYYY-MM-DD format")
        };
        Ok(DateRange {
            start_date: parse(&self.start)?,
            end_date: parse(&self.end)?,
        })
    }
}

#[derive(Debug)]
pub struct ListPage {
    pub list: TransactionList,
    pub filter: Option<FilterEditor>,
}

#[derive(Debug)]
pub struct FormPage {
    pub editor: TransactionEditor,
    pub focus: FormFocus,
}

impl FormPage {
    pub fn new(editor: TransactionEditor) -> Self {
        Self {
            editor,
            focus: FormFocus::new(TRANSACTION_FIELDS),
        }
    }

    pub fn input_mut(&mut self) -> &mut String {
        let form = &mut self.editor.form;
        match self.focus.current() {
            Field::Description => &mut form.description,
            Field::Value => &mut form.value,
            Field::TransactionDate => &mut form.transaction_date,
            _ => &mut form.title,
        }
    }
}

#[derive(Debug)]
pub enum Page {
    Landing,
    Login(LoginPage),
    Signup(SignupPage),
    Dashboard(Dashboard),
    List(ListPage),
    Detail(TransactionDetail),
    Form(FormPage),
}

impl Page {
    /// Whether printable keys should be treated as text input.
    pub fn is_typing(&self) -> bool {
        match self {
            Self::Login(_) | Self::Signup(_) | Self::Form(_) => true,
            Self::List(page) => page.filter.is_some(),
            Self::Landing | Self::Dashboard(_) | Self::Detail(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_both_ways() {
        let mut focus = FormFocus::new(SIGNUP_FIELDS);
        focus.prev();
        assert!(focus.is(Field::ConfirmPassword));
        focus.next();
        assert!(focus.is(Field::Name));
        focus.next();
        assert!(focus.is(Field::Email));
    }

    #[test]
    fn login_input_follows_focus() {
        let mut page = LoginPage::new(None);
        page.input_mut().push_str("ana@example.com");
        page.focus.next();
        page.input_mut().push_str("secret1");
        assert_eq!(page.form.email, "ana@example.com");
        assert_eq!(page.form.password, "secret1");
    }

    #[test]
    fn filter_parses_open_ranges() {
        let mut editor = FilterEditor::from_range(&DateRange::default());
        editor.start = "2024-01-01".to_string();
        let range = editor.parse().unwrap();
        assert_eq!(range.start_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(range.end_date, None);
    }

    #[test]
    fn filter_rejects_bad_dates() {
        let mut editor = FilterEditor::from_range(&DateRange::default());
        editor.toggle_focus();
        editor.input_mut().push_str("31/01/2024");
        assert_eq!(editor.parse(), Err("Date must be in YYYY-MM-DD format"));
    }

    #[test]
    fn filter_round_trips_current_range() {
        let range = DateRange {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
        };
        let editor = FilterEditor::from_range(&range);
        assert_eq!(editor.start, "2024-03-01");
        assert_eq!(editor.parse(), Ok(range));
    }
}
