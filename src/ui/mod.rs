pub mod client;
pub mod escape;
pub mod notifier;
pub mod page;
pub mod removal;
pub mod renderer;
pub mod signup;

#[cfg(test)]
pub(crate) mod testing;

pub use client::ActivitiesClient;
pub use escape::escape_html;
pub use page::{MessageKind, Page, SharedPage};
