use serde::Deserialize;

/// Per-activity payload of `GET /activities`; the activity name is the map key.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ActivityDetails {
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub schedule: String,
    pub description: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            schedule: details.schedule,
            description: details.description,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Capacity minus current roster. Negative when over-subscribed.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// Activities in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityBoard {
    activities: Vec<Activity>,
}

impl ActivityBoard {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    /// Decodes the `{name: details}` object, keeping key order.
    pub fn from_json_map(
        map: serde_json::Map<String, serde_json::Value>,
    ) -> serde_json::Result<Self> {
        let activities = map
            .into_iter()
            .map(|(name, value)| {
                serde_json::from_value::<ActivityDetails>(value)
                    .map(|details| Activity::new(name, details))
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Self { activities })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }
}
