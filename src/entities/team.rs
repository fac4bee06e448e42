use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Conference {
    #[serde(rename = "AFC")]
    Afc,
    #[serde(rename = "NFC")]
    Nfc,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub abbreviation: String,
    pub conference: Conference,
    pub division: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl Team {
    /// "Kansas City Chiefs"
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.city, self.name)
    }

    /// "Kansas City Chiefs (KC)", as listed in pick selectors
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} {} ({})", self.city, self.name, self.abbreviation)
    }
}
