/// Represents the provider (backend) used for large language model (LLM) inference.
///
/// Adding more providers in the future (e.g., a local runtime) is done by
/// extending this enum and the client that matches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// OpenAI chat completions API.
    OpenAI,
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProvider::OpenAI => f.write_str("OpenAI"),
        }
    }
}
