use serde::{Deserialize, Serialize};

// --- Update Records ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateKind {
    Events,
    Field,
    Press,
}

impl UpdateKind {
    pub const ALL: [UpdateKind; 3] = [UpdateKind::Events, UpdateKind::Field, UpdateKind::Press];

    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateKind::Events => "events",
            UpdateKind::Field => "field",
            UpdateKind::Press => "press",
        }
    }

    /// Badge text shown on rendered updates.
    pub fn badge_label(&self) -> &'static str {
        match self {
            UpdateKind::Events => "EVENTS",
            UpdateKind::Field => "FIELD",
            UpdateKind::Press => "PRESS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One campaign news or event item. Defined statically, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateRecord {
    pub id: &'static str,
    #[serde(rename = "type")]
    pub kind: UpdateKind,
    pub title: &'static str,
    /// ISO-8601 calendar date, e.g. `2026-02-14`.
    pub date: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
}

// --- Filter ---

/// Active category selection for the updates list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Only(UpdateKind),
}

impl Filter {
    pub const CHOICES: [Filter; 4] = [
        Filter::All,
        Filter::Only(UpdateKind::Events),
        Filter::Only(UpdateKind::Field),
        Filter::Only(UpdateKind::Press),
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(kind) => kind.as_str(),
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "all" => Some(Filter::All),
            other => UpdateKind::parse(other).map(Filter::Only),
        }
    }

    pub fn matches(&self, record: &UpdateRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(kind) => record.kind == *kind,
        }
    }

    /// Chip caption used by the page markup.
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(UpdateKind::Events) => "Events",
            Filter::Only(UpdateKind::Field) => "Field visits",
            Filter::Only(UpdateKind::Press) => "Press",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Filter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Filter::parse(&value).ok_or_else(|| format!("unknown filter: {value}"))
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.as_str().to_string()
    }
}

// --- Newsletter Cache ---

/// One entry in the persisted newsletter contact list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedContact {
    pub contact: String,
    /// Epoch milliseconds at the time of the append.
    pub ts: i64,
}
