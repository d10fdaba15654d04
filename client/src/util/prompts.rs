//! Prompt text sent to the backend for quick actions and typed questions.
//!
//! The chat log shows what the user typed; the backend receives the typed
//! text wrapped in [`QNA_GUIDELINES`] so answers come back in the numbered,
//! bold-question layout the renderer handles well.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

const QNA_GUIDELINES: &str = "You are an expert at extracting structured Q&A from technical documents.

Generate high-quality, concise, and technically accurate questions and answers from the provided documents.

Follow these rules:

• Only create questions based on content that actually exists in the documents.
• Each question must be exam-friendly, clear, and specific.
• Answers must be short, precise, and directly supported by the text.
• Do not hallucinate or assume anything beyond what is given.
• Format the output cleanly using numbered questions.
• Use bold formatting only for questions and section headings.
• Do not use any decorative symbols or special characters.";

const SUMMARY_PROMPT: &str = "Provide a comprehensive summary of all the uploaded documents.";

/// One-click prompts offered in the empty chat and the studio panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    Summary,
    QnA,
}

impl QuickAction {
    pub const ALL: [Self; 2] = [Self::Summary, Self::QnA];

    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::QnA => "Q&A",
        }
    }

    /// Text shown in the log and sent to the backend unchanged.
    pub fn prompt(self) -> String {
        match self {
            Self::Summary => SUMMARY_PROMPT.to_owned(),
            Self::QnA => format!("{QNA_GUIDELINES}\n\nExtract the Q&A from the uploaded documents."),
        }
    }
}

/// Wrap a typed question in the Q&A guidelines.
pub fn wrap_query(query: &str) -> String {
    format!("{QNA_GUIDELINES}\n\nNow answer the following query based on the documents:\n\nQUERY START\n{query}\nQUERY END")
}
