use itertools::Itertools;
use algorithm::meteor::{ single_meteor_score, MeteorParams };
use algorithm::string::{ join_lowercase, split_whitespace };

use errors::*;
use tuples::Tuple;
use super::backend::{ SimilarityBackend, cosine_similarity };
use super::SimilarityMethod;

/// Compares pairs of tuples with a similarity method, using the primitives of a backend
pub struct TripletComparator<'a> {
    backend: &'a dyn SimilarityBackend,
    meteor: MeteorParams,
}

impl<'a> TripletComparator<'a> {
    pub fn new(backend: &'a dyn SimilarityBackend, meteor: MeteorParams) -> TripletComparator<'a> {
        TripletComparator { backend, meteor }
    }

    /// Similarity of two tuples, 0 if they don't have the same arity
    pub fn compare_triplet(&self, t1: &Tuple, t2: &Tuple, method: SimilarityMethod) -> Result<f64> {
        if t1.len() != t2.len() {
            return Ok(0.0);
        }

        let sim = match method {
            SimilarityMethod::Embedding => {
                let x = self.backend.embed(&join_lowercase(t1.elements()))?;
                let y = self.backend.embed(&join_lowercase(t2.elements()))?;
                cosine_similarity(&x, &y)
            },
            SimilarityMethod::LexicalOverlap => {
                single_meteor_score(
                    &split_whitespace(&join_lowercase(t1.elements())),
                    &split_whitespace(&join_lowercase(t2.elements())),
                    &self.meteor,
                    |a, b| self.backend.shares_taxonomy_sense(a, b))
            },
            SimilarityMethod::Taxonomy => {
                t1.elements().iter().zip(t2.elements().iter())
                    .map(|(x, y)| if self.element_shares_sense(x, y) { 1.0 } else { 0.0 })
                    .product::<f64>()
            },
            SimilarityMethod::TokenSimilarity => {
                t1.elements().iter().zip(t2.elements().iter())
                    .map(|(x, y)| self.element_similarity(x, y))
                    .product::<f64>()
            },
        };

        Ok(sim)
    }

    /// Mean over tokens of `src` of their best similarity to a token of `target`.
    ///
    /// Function words of `src` are skipped unless `src` is a single token.
    pub fn element_similarity(&self, src: &str, target: &str) -> f64 {
        let s1 = self.backend.analyze(src);
        let s2 = self.backend.analyze(target);
        if s2.is_empty() {
            return 0.0;
        }

        let scores = s1.iter()
            .filter(|w| s1.len() == 1 || w.pos.is_content())
            .map(|w| {
                s2.iter()
                    .map(|x| self.backend.token_similarity(&w.text, &x.text))
                    .fold(0.0, f64::max)
            })
            .collect::<Vec<_>>();

        if scores.is_empty() {
            return 0.0;
        }
        scores.iter().sum::<f64>() / scores.len() as f64
    }

    /// Whether any token of `text1` shares a taxonomy sense with any token of `text2`
    pub fn element_shares_sense(&self, text1: &str, text2: &str) -> bool {
        let t1 = self.backend.analyze(text1);
        let t2 = self.backend.analyze(text2);
        t1.iter()
            .cartesian_product(t2.iter())
            .any(|(x, y)| self.backend.shares_taxonomy_sense(&x.text, &y.text))
    }
}
