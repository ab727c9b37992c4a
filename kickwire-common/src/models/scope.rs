use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::Error;

/// OAuth scopes understood by the Kick public API.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Scope {
    #[serde(rename = "user:read")]
    UserRead,
    #[serde(rename = "channel:read")]
    ChannelRead,
    #[serde(rename = "channel:write")]
    ChannelWrite,
    #[serde(rename = "chat:write")]
    ChatWrite,
    #[serde(rename = "streamkey:read")]
    StreamKeyRead,
    #[serde(rename = "events:subscribe")]
    EventSubscribe,
    #[serde(rename = "moderation:ban")]
    ModerationBan,
    #[serde(rename = "kicks:read")]
    KicksRead,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::UserRead => write!(f, "user:read"),
            Scope::ChannelRead => write!(f, "channel:read"),
            Scope::ChannelWrite => write!(f, "channel:write"),
            Scope::ChatWrite => write!(f, "chat:write"),
            Scope::StreamKeyRead => write!(f, "streamkey:read"),
            Scope::EventSubscribe => write!(f, "events:subscribe"),
            Scope::ModerationBan => write!(f, "moderation:ban"),
            Scope::KicksRead => write!(f, "kicks:read"),
        }
    }
}

impl FromStr for Scope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user:read" => Ok(Scope::UserRead),
            "channel:read" => Ok(Scope::ChannelRead),
            "channel:write" => Ok(Scope::ChannelWrite),
            "chat:write" => Ok(Scope::ChatWrite),
            "streamkey:read" => Ok(Scope::StreamKeyRead),
            "events:subscribe" => Ok(Scope::EventSubscribe),
            "moderation:ban" => Ok(Scope::ModerationBan),
            "kicks:read" => Ok(Scope::KicksRead),
            _ => Err(Error::UnknownScope(s.to_string())),
        }
    }
}

/// Joins scopes with spaces, the form the authorization endpoint expects.
pub fn scope_string(scopes: &[Scope]) -> String {
    scopes
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
