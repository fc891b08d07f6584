use crate::types::Headline;

/// Split a comma-separated keyword list, trimming entries and dropping empty ones.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep the headlines whose text contains any keyword, ignoring case.
/// With no keywords every headline is kept.
pub fn filter_headlines(headlines: Vec<Headline>, keywords: &[String]) -> Vec<Headline> {
    if keywords.is_empty() {
        return headlines;
    }
    let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    headlines
        .into_iter()
        .filter(|h| {
            let haystack = h.text.to_lowercase();
            needles.iter().any(|n| haystack.contains(n.as_str()))
        })
        .collect()
}
