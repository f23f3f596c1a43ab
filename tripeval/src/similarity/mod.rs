pub mod backend;
pub mod lexicon;
pub mod comparator;

use std::fmt;
use std::str::FromStr;

use errors::*;
use tuples::Arity;

pub use self::backend::{ SimilarityBackend, Token, Pos, cosine_similarity };
pub use self::lexicon::LexiconBackend;
pub use self::comparator::TripletComparator;

/// How two tuples are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SimilarityMethod {
    // cosine similarity of sentence embeddings
    #[serde(rename = "bert", alias = "embedding")]
    Embedding,
    // METEOR alignment score
    #[serde(rename = "meteor", alias = "lexical-overlap")]
    LexicalOverlap,
    // every pair of elements must share a taxonomy sense
    #[serde(rename = "wordnet", alias = "taxonomy")]
    Taxonomy,
    // product of the element-wise token similarities
    #[serde(rename = "spacy", alias = "token-similarity")]
    TokenSimilarity
}

impl SimilarityMethod {
    pub fn name(&self) -> &'static str {
        match *self {
            SimilarityMethod::Embedding => "bert",
            SimilarityMethod::LexicalOverlap => "meteor",
            SimilarityMethod::Taxonomy => "wordnet",
            SimilarityMethod::TokenSimilarity => "spacy",
        }
    }
}

impl FromStr for SimilarityMethod {
    type Err = Error;

    fn from_str(name: &str) -> Result<SimilarityMethod> {
        match name {
            "bert" | "embedding" => Ok(SimilarityMethod::Embedding),
            "meteor" | "lexical-overlap" => Ok(SimilarityMethod::LexicalOverlap),
            "wordnet" | "taxonomy" => Ok(SimilarityMethod::Taxonomy),
            "spacy" | "token-similarity" => Ok(SimilarityMethod::TokenSimilarity),
            _ => Err(ErrorKind::UnknownSimilarityMethod(name.to_owned()).into())
        }
    }
}

impl fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The method used for each arity class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodsByArity {
    pub object: SimilarityMethod,
    pub attribute: SimilarityMethod,
    pub relation: SimilarityMethod
}

impl MethodsByArity {
    pub fn default() -> MethodsByArity {
        MethodsByArity::uniform(SimilarityMethod::Embedding)
    }

    pub fn uniform(method: SimilarityMethod) -> MethodsByArity {
        MethodsByArity { object: method, attribute: method, relation: method }
    }

    /// Methods given by name, in arity order, e.g: ["bert", "meteor", "wordnet"]
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<MethodsByArity> {
        if names.len() != 3 {
            bail!("Expect one similarity method per arity, got {} methods", names.len());
        }

        Ok(MethodsByArity {
            object: names[0].as_ref().parse()?,
            attribute: names[1].as_ref().parse()?,
            relation: names[2].as_ref().parse()?,
        })
    }

    pub fn get(&self, arity: Arity) -> SimilarityMethod {
        match arity {
            Arity::Object => self.object,
            Arity::Attribute => self.attribute,
            Arity::Relation => self.relation,
        }
    }
}
