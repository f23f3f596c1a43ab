use regex::Regex;

/// Word pieces are runs of word characters (allowing an inner apostrophe, e.g: "man's"),
/// every other non-space character is a token of its own
const TOKEN_PATTERN: &str = r"\w+(?:'\w+)?|[^\w\s]";

pub struct Tokenizer {
    re: Regex
}

impl Tokenizer {
    pub fn new() -> Tokenizer {
        Tokenizer {
            re: Regex::new(TOKEN_PATTERN).expect("TOKEN_PATTERN must be a valid regex")
        }
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.re.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Join elements of a tuple into a single lowercase phrase, e.g: ("Man", "rides", "bike") to "man rides bike"
pub fn join_lowercase<S: AsRef<str>>(elements: &[S]) -> String {
    elements.iter()
        .map(|e| e.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whitespace tokenization of a phrase, owned tokens
pub fn split_whitespace(text: &str) -> Vec<String> {
    text.split_whitespace().map(|s| s.to_owned()).collect()
}
