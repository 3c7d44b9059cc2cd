use serde::{Deserialize, Serialize};

/// A language the service accepts as source or target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
    pub native_name: String,
}

// (code, name, native name), listed in the order clients see them
const SUPPORTED_LANGUAGES: &[(&str, &str, &str)] = &[
    ("eng_Latn", "English", "English"),
    ("swh_Latn", "Kiswahili", "Kiswahili"),
    ("kik_Latn", "Kikuyu", "Gĩkũyũ"),
    ("luo_Latn", "Luo", "Dholuo"),
    ("luy_Latn", "Luhya", "Luluhya"),
    ("kam_Latn", "Kamba", "Kikamba"),
    ("som_Latn", "Somali", "Soomaali"),
    ("kin_Latn", "Kinyarwanda", "Ikinyarwanda"),
];

/// Read-only table of supported languages
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    entries: Vec<LanguageEntry>,
}

impl LanguageCatalog {
    pub fn new(entries: Vec<LanguageEntry>) -> Self {
        Self { entries }
    }

    pub fn lookup(&self, code: &str) -> Option<&LanguageEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// All entries in definition order
    pub fn list_all(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::new(
            SUPPORTED_LANGUAGES
                .iter()
                .map(|(code, name, native_name)| LanguageEntry {
                    code: code.to_string(),
                    name: name.to_string(),
                    native_name: native_name.to_string(),
                })
                .collect(),
        )
    }
}
