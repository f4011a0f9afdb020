use askama::Template;
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::models::{Activity, ActivityBoard};
use crate::services::activities_api_service::ActivitiesApi;
use crate::ui::escape::escape_html;
use crate::ui::page::{Page, SelectOption, SharedPage};

pub const LOAD_FAILED_HTML: &str = "<p>Failed to load activities. Please try again later.</p>";

// Fields are escaped before they reach the templates.
#[derive(Template)]
#[template(path = "activity_entry.html", escape = "none")]
struct ActivityEntryTemplate {
    name: String,
    schedule: String,
    signed: usize,
}

#[derive(Template)]
#[template(path = "activity_card.html", escape = "none")]
struct ActivityCardTemplate {
    name: String,
    schedule: String,
    description: String,
    spots_left: i64,
    participants: Vec<String>,
}

impl ActivityEntryTemplate {
    fn for_activity(activity: &Activity) -> Self {
        Self {
            name: escape_html(&activity.name).into_owned(),
            schedule: escape_html(&activity.schedule).into_owned(),
            signed: activity.participants.len(),
        }
    }
}

impl ActivityCardTemplate {
    fn for_activity(activity: &Activity) -> Self {
        Self {
            name: escape_html(&activity.name).into_owned(),
            schedule: escape_html(&activity.schedule).into_owned(),
            description: escape_html(&activity.description).into_owned(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|email| escape_html(email).into_owned())
                .collect(),
        }
    }
}

/// Replaces the list, the cards and the select options with a view of `board`.
/// The page is only touched once every fragment rendered.
pub fn render(board: &ActivityBoard, page: &mut Page) -> askama::Result<()> {
    let mut list = String::new();
    let mut cards = String::new();
    let mut options = vec![SelectOption::placeholder()];

    for activity in board.iter() {
        list.push_str(&ActivityEntryTemplate::for_activity(activity).render()?);
        cards.push_str(&ActivityCardTemplate::for_activity(activity).render()?);
        options.push(SelectOption::activity(&activity.name));
    }

    page.activities_list = list;
    page.activity_cards = cards;
    page.activity_options = options;
    Ok(())
}

/// Keeps the last successfully fetched board and re-renders the page from it.
#[derive(Default)]
pub struct ActivityRenderer {
    board: RwLock<Option<ActivityBoard>>,
}

impl ActivityRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches the full board and redraws. Failures never reach the caller: the
    /// list shows a fixed message while cards and options keep their old content.
    pub async fn refresh(&self, api: &dyn ActivitiesApi, page: &SharedPage) {
        let fetched = api.list_activities().await;

        let mut page = page.lock().await;
        page.loaded = true;
        let board = match fetched {
            Ok(board) => board,
            Err(e) => {
                error!("Error fetching activities: {}", e);
                page.activities_list = LOAD_FAILED_HTML.to_string();
                return;
            }
        };

        if let Err(e) = render(&board, &mut page) {
            error!("Error rendering activities: {}", e);
            page.activities_list = LOAD_FAILED_HTML.to_string();
            return;
        }
        debug!(activities = board.len(), "activities rendered");
        *self.board.write().await = Some(board);
    }

    /// The board behind the current view, if any fetch has succeeded.
    pub async fn board(&self) -> Option<ActivityBoard> {
        self.board.read().await.clone()
    }
}
