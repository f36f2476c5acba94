use serde::{Deserialize, Deserializer, Serialize, de};

use crate::config::ConfigError;
use crate::types::ResourceLimits;

const INVALID_FILE_EXT_CHARS: [char; 2] = ['/', '.'];

/// A language offered in the editor's language picker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    /// Label shown in the picker (e.g., "C++")
    pub name: String,

    /// Syntax mode id understood by the editor widget (e.g., "cpp")
    pub editor: String,

    /// File extension listed next to the language name
    pub extension: FileExtension,

    /// Limits reported for this language (overrides defaults)
    #[serde(default)]
    pub limits: Option<ResourceLimits>,
}

/// File extension without dot (e.g., "cpp")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileExtension(String);

impl FileExtension {
    pub fn new(extension: &str) -> Result<Self, ConfigError> {
        if extension.contains(INVALID_FILE_EXT_CHARS) {
            return Err(ConfigError::InvalidFileExtChars);
        }
        Ok(Self(extension.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for FileExtension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FileExtension::new(&s).map_err(|_| {
            de::Error::invalid_value(
                de::Unexpected::Str(&s),
                &"a file extension without '/' or '.' characters",
            )
        })
    }
}

impl std::fmt::Display for FileExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entry of `GET /api/languages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub id: String,
    pub name: String,
    pub editor: String,
    pub extension: String,
}

impl LanguageInfo {
    pub fn new(id: &str, language: &Language) -> Self {
        Self {
            id: id.to_owned(),
            name: language.name.clone(),
            editor: language.editor.clone(),
            extension: language.extension.to_string(),
        }
    }
}
