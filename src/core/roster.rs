use super::names::{designer_bio, format_full_display_name, page_title, FALLBACK_DISPLAY_NAME};
use fnv::FnvHashMap;
use serde::Deserialize;
use thiserror::Error;

/// Bundled roster used when `data/graduates.json` cannot be fetched or parsed.
pub const FALLBACK_GRADUATES: &[&str] = &[
    "ANG WEI JIE",
    "CHAN MEI LING, RACHEL",
    "CHEN JIA HUI",
    "GOH KAI XIN, SARAH",
    "LEE JUN HAO, MARCUS",
    "LIM SHU FEN",
    "NG ZHI YANG",
    "ONG HUI MIN, CLARA",
    "TAN YU XUAN",
    "WONG KAH WAI, DANIEL",
];

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("malformed roster json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("roster has no graduates")]
    Empty,
}

/// One graduate after normalization. `full_name` is the registry spelling
/// and doubles as the lookup key in `designer.html?name=`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graduate {
    pub full_name: String,
}

impl Graduate {
    pub fn display_name(&self) -> String {
        format_full_display_name(&self.full_name)
    }
}

// The JSON may carry bare strings or `{ "fullName": ... }` records.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawGraduate {
    Record {
        #[serde(rename = "fullName")]
        full_name: String,
    },
    Name(String),
}

impl From<RawGraduate> for Graduate {
    fn from(raw: RawGraduate) -> Self {
        match raw {
            RawGraduate::Record { full_name } | RawGraduate::Name(full_name) => {
                Graduate { full_name }
            }
        }
    }
}

#[derive(Deserialize)]
struct RosterFile {
    graduates: Vec<RawGraduate>,
}

/// Ordered list of graduates with a full-name index.
#[derive(Clone, Debug)]
pub struct Roster {
    graduates: Vec<Graduate>,
    by_name: FnvHashMap<String, usize>,
}

impl Roster {
    /// Builds from already-normalized records. The first occurrence of a
    /// duplicated name wins lookups.
    pub fn new(graduates: Vec<Graduate>) -> Result<Self, RosterError> {
        if graduates.is_empty() {
            return Err(RosterError::Empty);
        }
        let by_name = index_by_name(&graduates);
        Ok(Self { graduates, by_name })
    }

    pub fn from_json(json: &str) -> Result<Self, RosterError> {
        let file: RosterFile = serde_json::from_str(json)?;
        Self::new(file.graduates.into_iter().map(Graduate::from).collect())
    }

    pub fn fallback() -> Self {
        let graduates = FALLBACK_GRADUATES
            .iter()
            .map(|name| Graduate {
                full_name: (*name).to_string(),
            })
            .collect::<Vec<_>>();
        let by_name = index_by_name(&graduates);
        Self { graduates, by_name }
    }

    /// Parse `json`, logging and falling back to the bundled roster on error.
    pub fn from_json_or_fallback(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(roster) => roster,
            Err(e) => {
                log::warn!("[roster] {e}; using bundled roster");
                Self::fallback()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.graduates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graduates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Graduate> {
        self.graduates.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Graduate> {
        self.graduates.iter()
    }

    pub fn position_of(&self, full_name: &str) -> Option<usize> {
        self.by_name.get(full_name).copied()
    }
}

fn index_by_name(graduates: &[Graduate]) -> FnvHashMap<String, usize> {
    let mut by_name = FnvHashMap::default();
    for (i, g) in graduates.iter().enumerate() {
        by_name.entry(g.full_name.clone()).or_insert(i);
    }
    by_name
}

/// Everything the designer page needs to render for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DesignerView {
    /// Roster index of the shown designer; `None` if `?name=` matched nobody.
    pub current: Option<usize>,
    pub display_name: String,
    pub bio: String,
    pub title: String,
}

impl DesignerView {
    /// `requested` is the decoded `?name=` value. Without one (or with an
    /// empty one) the first graduate is shown. An unknown name is still
    /// displayed, but the page title falls back to "Designer" and nothing is
    /// highlighted.
    pub fn select(roster: &Roster, requested: Option<&str>) -> Self {
        let requested = requested.filter(|name| !name.is_empty());
        let (current, shown_name) = match requested {
            Some(name) => (roster.position_of(name), name.to_string()),
            None => (
                Some(0),
                roster.get(0).map(|g| g.full_name.clone()).unwrap_or_default(),
            ),
        };
        let display_name = format_full_display_name(&shown_name);
        let title_name = current
            .and_then(|i| roster.get(i))
            .map(Graduate::display_name)
            .unwrap_or_else(|| FALLBACK_DISPLAY_NAME.to_string());
        Self {
            current,
            bio: designer_bio(&display_name),
            title: page_title(&title_name),
            display_name,
        }
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current == Some(index)
    }
}
