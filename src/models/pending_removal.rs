/// A participant removal waiting for the user to confirm or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub activity: String,
    pub email: String,
}
