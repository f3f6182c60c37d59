//! Sentence splitting shared by summarize and key-point extraction

/// Split text into sentences on `.`, `!`, or `?` followed by whitespace.
///
/// The terminal punctuation stays with its sentence; the whitespace between
/// sentences is consumed. Blank sentences are dropped. Text with no
/// sentence-ending punctuation is a single sentence. Abbreviations such as
/// "Mr. Smith" are split at the period; that is accepted upstream behavior.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);

        if matches!(c, '.' | '!' | '?') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            push_sentence(&mut sentences, &current);
            current.clear();
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
        }
    }

    push_sentence(&mut sentences, &current);
    sentences
}

fn push_sentence(sentences: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
