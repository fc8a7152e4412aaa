//! Review prompt builder.

use crate::feedback::SCORE_MARKER;

/// System message sent with every review request.
pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

/// Builds the review prompt: instructions, the assignment in quotes, a line
/// break, then the concatenated source code (possibly empty).
pub fn build_review_prompt(language: &str, assignment: &str, code: &str) -> String {
    let mut s = String::with_capacity(512 + assignment.len() + code.len());
    s.push_str(&format!(
        "Review the following {language} code for the homework assignment: '{assignment}'. "
    ));
    s.push_str("Check for code smells, multithreading errors, bad naming, and any other issues. ");
    s.push_str(&format!(
        "After your analysis, provide specific comments on any issues you find and then write '{SCORE_MARKER}' followed by a grade from 2 to 5. "
    ));
    s.push_str("A score of 2 means the job isn't done at all, and a score of 5 means the job is done perfectly.");
    s.push('\n');
    s.push_str(code);
    s
}
