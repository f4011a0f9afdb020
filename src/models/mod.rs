pub mod activity;
pub mod command_reply;
pub mod pending_removal;

pub use activity::{Activity, ActivityBoard, ActivityDetails};
pub use command_reply::{CommandReply, ReplyBody};
pub use pending_removal::PendingRemoval;
