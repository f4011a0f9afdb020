use std::sync::Arc;

use tokio::sync::Mutex;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const LOADING_HTML: &str = "<p>Loading activities...</p>";

/// Everything the sign-up page shows. Rendering it to HTML is the web layer's job.
#[derive(Debug, Clone)]
pub struct Page {
    /// Inner HTML of `#activities-list`.
    pub activities_list: String,
    /// Inner HTML of `#activities`.
    pub activity_cards: String,
    /// Options of `#activity`, placeholder first.
    pub activity_options: Vec<SelectOption>,
    pub signup_form: SignupForm,
    pub message: MessageArea,
    pub delete_modal: DeleteModal,
    /// Set once the first fetch has been attempted.
    pub loaded: bool,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            activities_list: LOADING_HTML.to_string(),
            activity_cards: String::new(),
            activity_options: vec![SelectOption::placeholder()],
            signup_form: SignupForm::default(),
            message: MessageArea::default(),
            delete_modal: DeleteModal::default(),
            loaded: false,
        }
    }
}

pub type SharedPage = Arc<Mutex<Page>>;

pub fn shared_page() -> SharedPage {
    Arc::new(Mutex::new(Page::default()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
        }
    }

    pub fn activity(name: &str) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub activity: String,
    pub email: String,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.activity.clear();
        self.email.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageArea {
    pub text: String,
    pub kind: Option<MessageKind>,
    pub hidden: bool,
}

impl Default for MessageArea {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: None,
            hidden: true,
        }
    }
}

impl MessageArea {
    /// Value of the element's `class` attribute.
    pub fn class_name(&self) -> String {
        let mut class = String::from("message");
        if let Some(kind) = self.kind {
            class.push(' ');
            class.push_str(kind.as_str());
        }
        if self.hidden {
            class.push_str(" hidden");
        }
        class
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteModal {
    pub message: String,
    pub hidden: bool,
    pub focused: bool,
}

impl Default for DeleteModal {
    fn default() -> Self {
        Self {
            message: String::new(),
            hidden: true,
            focused: false,
        }
    }
}

impl DeleteModal {
    pub fn open(&mut self, message: String) {
        self.message = message;
        self.hidden = false;
        self.focused = true;
    }

    pub fn close(&mut self) {
        self.hidden = true;
        self.focused = false;
    }
}
