/// The fixed set of header names this tool extracts from a message.
/// Every other header in a header block is ignored.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum HeaderKind {
    Date,
    From,
    Subject
}

impl HeaderKind {
    /// Fixed table order the scanner tries the kinds in. The patterns
    /// are anchored on distinct header names, so at most one of them
    /// can match a given line.
    pub const ALL: [HeaderKind; 3] = [HeaderKind::Date, HeaderKind::From, HeaderKind::Subject];

    /// Canonical lower-case header name, as used in the persisted
    /// document regardless of the casing in the source line.
    pub fn name(&self) -> &'static str {
        match self {
            HeaderKind::Date => "date",
            HeaderKind::From => "from",
            HeaderKind::Subject => "subject"
        }
    }
}

/// Parsed header record of a single message.
///
/// Only headers that were actually matched are present; an absent
/// header stays off the serialized record entirely instead of showing
/// up empty or null.
#[derive(Debug,Clone,Default,PartialEq,Eq,Serialize,Deserialize)]
pub struct MessageHeaders {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>
}

impl MessageHeaders {
    pub fn new() -> MessageHeaders {
        MessageHeaders::default()
    }

    pub fn get(&self, kind: HeaderKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    /// Sets the value for a header, overwriting any previous value. A
    /// header repeated within one message keeps its last occurrence.
    pub fn set(&mut self, kind: HeaderKind, value: String) {
        *self.slot_mut(kind) = Some(value);
    }

    /// Appends a folded fragment onto a header value, verbatim, with no
    /// separator between the fragments.
    pub fn append(&mut self, kind: HeaderKind, fragment: &str) {
        self.slot_mut(kind).get_or_insert_with(String::new).push_str(fragment);
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.from.is_none() && self.subject.is_none()
    }

    pub fn date(&self) -> Option<&str> {
        self.get(HeaderKind::Date)
    }

    pub fn from(&self) -> Option<&str> {
        self.get(HeaderKind::From)
    }

    pub fn subject(&self) -> Option<&str> {
        self.get(HeaderKind::Subject)
    }

    fn slot(&self, kind: HeaderKind) -> &Option<String> {
        match kind {
            HeaderKind::Date => &self.date,
            HeaderKind::From => &self.from,
            HeaderKind::Subject => &self.subject
        }
    }

    fn slot_mut(&mut self, kind: HeaderKind) -> &mut Option<String> {
        match kind {
            HeaderKind::Date => &mut self.date,
            HeaderKind::From => &mut self.from,
            HeaderKind::Subject => &mut self.subject
        }
    }
}

/// Everything extracted from one archive run, in traversal order.
/// Serializes as a document with the single top-level key `messages`.
#[derive(Debug,Clone,Default,PartialEq,Eq,Serialize,Deserialize)]
pub struct MessageReport {
    pub messages: Vec<MessageHeaders>
}

impl MessageReport {
    pub fn new(messages: Vec<MessageHeaders>) -> MessageReport {
        MessageReport {
            messages
        }
    }
}
