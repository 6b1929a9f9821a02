//! ==============================================================================
//! joke.rs - normalized joke record
//! ==============================================================================
//!
//! purpose:
//!     the in-memory representation of one fetched joke, deserialized
//!     straight from the jokeapi.dev wire format.
//!
//! wire format (https://v2.jokeapi.dev):
//!     {"id": 23, "category": "Programming", "type": "single", "joke": "..."}
//!     {"id": 42, "category": "Programming", "type": "twopart",
//!      "setup": "...", "delivery": "..."}
//!     extra fields (error, safe, lang, flags, ...) are ignored.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==============================================================================
// types
// ==============================================================================

/// joke identifier as sent by the api
///
/// jokeapi sends numbers today, but the contract only promises "string or
/// number", so both shapes deserialize. treated as opaque and unique for the
/// lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JokeId {
    Number(u64),
    Text(String),
}

impl fmt::Display for JokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// one normalized joke
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Joke {
    pub id: JokeId,
    /// category label from the api; stored but never rendered
    pub category: String,
    #[serde(flatten)]
    pub body: JokeBody,
}

/// joke body, tagged by the api's `type` field
///
/// a single joke carries exactly one text, a twopart joke exactly a setup
/// and a punchline; other combinations cannot be represented. a payload
/// missing a required field fails to deserialize and counts as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JokeBody {
    Single {
        #[serde(rename = "joke")]
        text: String,
    },
    TwoPart {
        setup: String,
        #[serde(rename = "delivery")]
        punchline: String,
    },
}

/// discriminant of [`JokeBody`] without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JokeKind {
    Single,
    TwoPart,
}

// ==============================================================================
// accessors
// ==============================================================================

impl Joke {
    /// which shape of joke this is
    pub fn kind(&self) -> JokeKind {
        match self.body {
            JokeBody::Single { .. } => JokeKind::Single,
            JokeBody::TwoPart { .. } => JokeKind::TwoPart,
        }
    }

    /// the text a copy action places on the clipboard: the single text
    /// verbatim, or setup and punchline joined by one space
    pub fn display_text(&self) -> String {
        match &self.body {
            JokeBody::Single { text } => text.clone(),
            JokeBody::TwoPart { setup, punchline } => format!("{setup} {punchline}"),
        }
    }

    /// the lines shown in the joke area: one for a single joke, setup and
    /// punchline on separate lines for a twopart joke
    pub fn display_lines(&self) -> Vec<String> {
        match &self.body {
            JokeBody::Single { text } => vec![text.clone()],
            JokeBody::TwoPart { setup, punchline } => vec![setup.clone(), punchline.clone()],
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_joke() {
        let json = r#"{
            "error": false,
            "category": "Programming",
            "type": "single",
            "joke": "There are only 10 kinds of people in this world.",
            "flags": {"nsfw": false, "religious": false},
            "id": 23,
            "safe": true,
            "lang": "en"
        }"#;
        let joke: Joke = serde_json::from_str(json).unwrap();
        assert_eq!(joke.id, JokeId::Number(23));
        assert_eq!(joke.category, "Programming");
        assert_eq!(joke.kind(), JokeKind::Single);
        assert_eq!(
            joke.display_text(),
            "There are only 10 kinds of people in this world."
        );
        assert_eq!(joke.display_lines().len(), 1);
    }

    #[test]
    fn test_parse_twopart_joke() {
        let json = r#"{
            "error": false,
            "category": "Programming",
            "type": "twopart",
            "setup": "Why do programmers prefer dark mode?",
            "delivery": "Because light attracts bugs.",
            "id": 42,
            "safe": true,
            "lang": "en"
        }"#;
        let joke: Joke = serde_json::from_str(json).unwrap();
        assert_eq!(joke.kind(), JokeKind::TwoPart);
        assert_eq!(
            joke.display_lines(),
            vec![
                "Why do programmers prefer dark mode?".to_string(),
                "Because light attracts bugs.".to_string(),
            ]
        );
    }

    #[test]
    fn test_display_text_joins_with_single_space() {
        let joke = Joke {
            id: JokeId::Number(7),
            category: "Programming".to_string(),
            body: JokeBody::TwoPart {
                setup: "A".to_string(),
                punchline: "B".to_string(),
            },
        };
        // exactly one space, nothing appended
        assert_eq!(joke.display_text(), "A B");
    }

    #[test]
    fn test_parse_rejects_missing_delivery() {
        let json = r#"{"category":"Programming","type":"twopart","setup":"A","id":1}"#;
        assert!(serde_json::from_str::<Joke>(json).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let json = r#"{"category":"Programming","type":"threepart","joke":"X","id":1}"#;
        assert!(serde_json::from_str::<Joke>(json).is_err());
    }

    #[test]
    fn test_joke_id_accepts_string_or_number() {
        let numeric: Joke = serde_json::from_str(
            r#"{"category":"Programming","type":"single","joke":"X","id":9}"#,
        )
        .unwrap();
        assert_eq!(numeric.id.to_string(), "9");

        let textual: Joke = serde_json::from_str(
            r#"{"category":"Programming","type":"single","joke":"X","id":"j-9"}"#,
        )
        .unwrap();
        assert_eq!(textual.id, JokeId::Text("j-9".to_string()));
    }
}
