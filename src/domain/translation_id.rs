use uuid::Uuid;

/// Identifies one in-flight translation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslationId(Uuid);

impl TranslationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TranslationId {
    fn default() -> Self {
        Self::new()
    }
}
