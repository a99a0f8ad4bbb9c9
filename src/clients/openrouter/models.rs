#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OpenRouterModel {
    #[default]
    DeepSeekR1T2Chimera, // "tngtech/deepseek-r1t2-chimera:free"
    DeepSeekChat,        // "deepseek/deepseek-chat"
    Override(String),
}

impl OpenRouterModel {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::DeepSeekR1T2Chimera => "tngtech/deepseek-r1t2-chimera:free",
            Self::DeepSeekChat => "deepseek/deepseek-chat",
            Self::Override(s) => s.as_str(),
        }
    }
}

impl From<&str> for OpenRouterModel {
    fn from(id: &str) -> Self {
        match id {
            "tngtech/deepseek-r1t2-chimera:free" => Self::DeepSeekR1T2Chimera,
            "deepseek/deepseek-chat" => Self::DeepSeekChat,
            other => Self::Override(other.to_string()),
        }
    }
}
