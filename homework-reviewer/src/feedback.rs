//! Reply parsing: turns free-text model output into a score and comments.

/// Literal anchor that precedes the numeric grade in the model reply.
pub const SCORE_MARKER: &str = "Score: ";

/// Result of one homework review.
///
/// `score` is expected in `2..=5` but is neither validated nor clamped;
/// 0 means the reply carried no readable grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkFeedback {
    score: i32,
    comments: String,
}

impl HomeworkFeedback {
    pub fn new(score: i32, comments: impl Into<String>) -> Self {
        Self {
            score,
            comments: comments.into(),
        }
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }
}

/// Splits a reply at the first [`SCORE_MARKER`].
///
/// Text before the marker (trimmed) becomes the comments. The run of numeric
/// characters right after the marker becomes the score. Only plain ASCII
/// digits parse, so a run that is empty, overflows, or contains any other
/// script's digit gives 0. Without a marker the whole trimmed reply is the
/// comment and the score is 0.
pub fn parse_feedback(reply: &str) -> HomeworkFeedback {
    let Some(idx) = reply.find(SCORE_MARKER) else {
        return HomeworkFeedback::new(0, reply.trim());
    };

    let after = &reply[idx + SCORE_MARKER.len()..];
    let digits_end = after
        .find(|c: char| !c.is_numeric())
        .unwrap_or(after.len());
    let score = after[..digits_end].parse::<i32>().unwrap_or(0);

    HomeworkFeedback::new(score, reply[..idx].trim())
}
