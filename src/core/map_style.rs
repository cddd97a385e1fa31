use serde::{Deserialize, Serialize};

/// Auswählbarer Kartenstil (Basemap)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleOption {
    pub name: String,
    pub url: String,
    pub attribution: String,
}

impl StyleOption {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            attribution: String::new(),
        }
    }
}
