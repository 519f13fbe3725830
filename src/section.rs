use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// One named region of the single-page layout.
///
/// The string form (`"home"`, `"projects"`, ...) doubles as the DOM `id` of the
/// rendered `<section>` and as the `#fragment` of its navigation link.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Section {
    Home,
    Projects,
    Experience,
    Skills,
    Contact,
}

impl Section {
    /// Declared page order. Active-section detection walks this order, not the
    /// visual one.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Projects,
        Section::Experience,
        Section::Skills,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}
