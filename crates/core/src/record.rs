//! Keyed text records and the two resource kinds that hold them.

use std::fmt;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::constants::{MAX_BUDGET_CHARS, MAX_CONVERSATION_ID_BYTES, MAX_FACT_CHARS};
use crate::error::ValidationError;

/// Which table a record lives in.
///
/// Both kinds share one shape (a conversation id and a text column) and differ
/// only in table name, JSON field name and length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Fact,
    Budget,
}

impl ResourceKind {
    pub const ALL: [Self; 2] = [Self::Fact, Self::Budget];

    /// Table name, also used as the URL prefix.
    #[must_use]
    pub const fn table(self) -> &'static str {
        match self {
            Self::Fact => "facts",
            Self::Budget => "budgets",
        }
    }

    /// Name of the text column and of the JSON body field.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::Fact => "fact",
            Self::Budget => "budget",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fact => "Fact",
            Self::Budget => "Budget",
        }
    }

    /// Maximum text length in characters.
    #[must_use]
    pub const fn max_chars(self) -> usize {
        match self {
            Self::Fact => MAX_FACT_CHARS,
            Self::Budget => MAX_BUDGET_CHARS,
        }
    }

    /// Checks the text against this kind's limit without allocating.
    pub fn validate_text(self, text: &str) -> Result<(), ValidationError> {
        let max = self.max_chars();
        // Byte length bounds char count from above.
        if text.len() <= max {
            return Ok(());
        }
        let len = text.chars().count();
        if len > max {
            return Err(ValidationError::TextTooLong { field: self.field(), len, max });
        }
        Ok(())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fact" | "facts" => Ok(Self::Fact),
            "budget" | "budgets" => Ok(Self::Budget),
            other => Err(format!("unknown resource kind: {other}")),
        }
    }
}

/// Validates a conversation id: 1 to 255 bytes.
pub fn validate_conversation_id(conversation_id: &str) -> Result<(), ValidationError> {
    if conversation_id.is_empty() {
        return Err(ValidationError::EmptyConversationId);
    }
    if conversation_id.len() > MAX_CONVERSATION_ID_BYTES {
        return Err(ValidationError::ConversationIdTooLong {
            len: conversation_id.len(),
            max: MAX_CONVERSATION_ID_BYTES,
        });
    }
    Ok(())
}

/// One stored row: a conversation id and its text.
///
/// Serializes as `{"conversation_id": .., "<field>": ..}` where `<field>` is
/// `fact` or `budget` depending on [`ResourceKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: ResourceKind,
    pub conversation_id: String,
    pub text: String,
}

impl Record {
    #[must_use]
    pub fn new(kind: ResourceKind, conversation_id: String, text: String) -> Self {
        Self { kind, conversation_id, text }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("conversation_id", &self.conversation_id)?;
        map.serialize_entry(self.kind.field(), &self.text)?;
        map.end()
    }
}
