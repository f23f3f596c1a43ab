use ndarray::Array1;

use errors::*;

/// Universal part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pos {
    Noun,
    ProperNoun,
    Adjective,
    Adverb,
    Verb,
    Auxiliary,
    Determiner,
    Adposition,
    Pronoun,
    Conjunction,
    Particle,
    Numeral,
    Punctuation,
    Other
}

impl Pos {
    /// Open-class words; the others are function words and carry no similarity signal
    pub fn is_content(&self) -> bool {
        match *self {
            Pos::Noun | Pos::ProperNoun | Pos::Adjective | Pos::Adverb | Pos::Verb => true,
            _ => false
        }
    }

    pub fn from_tag(tag: &str) -> Option<Pos> {
        let pos = match tag {
            "NOUN" => Pos::Noun,
            "PROPN" => Pos::ProperNoun,
            "ADJ" => Pos::Adjective,
            "ADV" => Pos::Adverb,
            "VERB" => Pos::Verb,
            "AUX" => Pos::Auxiliary,
            "DET" => Pos::Determiner,
            "ADP" => Pos::Adposition,
            "PRON" => Pos::Pronoun,
            "CCONJ" | "SCONJ" | "CONJ" => Pos::Conjunction,
            "PART" => Pos::Particle,
            "NUM" => Pos::Numeral,
            "PUNCT" | "SYM" => Pos::Punctuation,
            "X" | "INTJ" => Pos::Other,
            _ => return None
        };
        Some(pos)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: Pos
}

impl Token {
    pub fn new(text: &str, pos: Pos) -> Token {
        Token { text: text.to_owned(), pos }
    }
}

/// Similarity primitives needed to compare tuples. Implementations load their models once
/// and are read-only afterward.
pub trait SimilarityBackend {
    /// Sentence embedding of a short text
    fn embed(&self, text: &str) -> Result<Array1<f32>>;

    /// Tokenize and part-of-speech tag a text
    fn analyze(&self, text: &str) -> Vec<Token>;

    /// Similarity of two tokens, in [0, 1]
    fn token_similarity(&self, a: &str, b: &str) -> f64;

    /// Whether two tokens share a sense in the taxonomy
    fn shares_taxonomy_sense(&self, a: &str, b: &str) -> bool;
}

/// Cosine similarity, 0 if one of the vectors has zero norm or dimensions differ.
/// Vectors with non-finite values also give 0.
pub fn cosine_similarity(x: &Array1<f32>, y: &Array1<f32>) -> f64 {
    if x.len() != y.len() {
        return 0.0;
    }

    let norm = (x.dot(x) as f64).sqrt() * (y.dot(y) as f64).sqrt();
    if norm == 0.0 || !norm.is_finite() {
        return 0.0;
    }

    let sim = x.dot(y) as f64 / norm;
    if sim.is_finite() { sim } else { 0.0 }
}
