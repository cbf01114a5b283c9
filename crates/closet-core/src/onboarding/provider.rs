use serde::{Deserialize, Serialize};

/// Mailbox the receipt scan connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    Google,
    Yahoo,
    Outlook,
    Apple,
}

impl EmailProvider {
    pub const ALL: [EmailProvider; 4] = [
        EmailProvider::Google,
        EmailProvider::Yahoo,
        EmailProvider::Outlook,
        EmailProvider::Apple,
    ];

    pub fn id(self) -> &'static str {
        match self {
            EmailProvider::Google => "google",
            EmailProvider::Yahoo => "yahoo",
            EmailProvider::Outlook => "outlook",
            EmailProvider::Apple => "apple",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            EmailProvider::Google => "Google",
            EmailProvider::Yahoo => "Yahoo",
            EmailProvider::Outlook => "Outlook",
            EmailProvider::Apple => "Apple",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| provider.id() == id)
    }
}
