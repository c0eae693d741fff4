//! Widget Configuration
//!
//! Storage key and the label bundle for the chosen locale.

/// Default key of the persisted blob
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Korean,
}

impl Locale {
    /// Pick a locale from a BCP 47 tag such as `navigator.language`
    pub fn from_language_tag(tag: &str) -> Self {
        if tag.to_ascii_lowercase().starts_with("ko") {
            Locale::Korean
        } else {
            Locale::English
        }
    }

    pub fn labels(&self) -> Labels {
        match self {
            Locale::English => Labels {
                title: "To-do",
                edit: "Edit",
                commit: "Done",
                add: "Add",
                placeholder: "What needs to be done?",
                save_failed: "Changes could not be saved",
                hints: &[
                    HintText { before: "Type in the box below and press 'Add' to add a task.", emphasis: "", after: "" },
                    HintText { before: "", emphasis: "Left-click", after: " a task to mark it done." },
                    HintText { before: "", emphasis: "Right-click", after: " a task to delete it." },
                    HintText { before: "Press the ", emphasis: "'Edit'", after: " button to change a task's text." },
                ],
            },
            Locale::Korean => Labels {
                title: "할 일 목록",
                edit: "수정",
                commit: "완료",
                add: "추가",
                placeholder: "할 일을 입력하세요",
                save_failed: "변경 사항을 저장하지 못했습니다",
                hints: &[
                    HintText { before: "할 일을 추가하려면 아래 입력창에 내용을 입력하고 '추가' 버튼을 누르세요.", emphasis: "", after: "" },
                    HintText { before: "할 일을 완료하려면 항목을 ", emphasis: "좌클릭", after: "하세요." },
                    HintText { before: "할 일을 삭제하려면 항목을 ", emphasis: "우클릭", after: "하세요." },
                    HintText { before: "할 일 내용을 수정하려면 ", emphasis: "'수정'", after: " 버튼을 누르세요." },
                ],
            },
        }
    }
}

/// One instructional hint line, with an optional emphasised fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintText {
    pub before: &'static str,
    pub emphasis: &'static str,
    pub after: &'static str,
}

/// Fixed UI strings for one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    /// Edit-trigger label while viewing
    pub edit: &'static str,
    /// Edit-trigger label while editing
    pub commit: &'static str,
    pub add: &'static str,
    pub placeholder: &'static str,
    /// Prefix of the notice shown when a save fails
    pub save_failed: &'static str,
    pub hints: &'static [HintText],
}

/// Widget configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub storage_key: String,
    pub locale: Locale,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            locale: Locale::default(),
        }
    }
}

impl WidgetConfig {
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    pub fn labels(&self) -> Labels {
        self.locale.labels()
    }
}
