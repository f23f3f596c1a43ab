use std::cell::RefCell;
use fnv::FnvHashMap;
use ndarray::Array1;
use tripeval::prelude::*;

/// Backend with fixed embeddings, token similarities and senses. Records every embedded text.
pub struct MockBackend {
    embeddings: FnvHashMap<String, Vec<f32>>,
    token_sims: FnvHashMap<(String, String), f64>,
    senses: FnvHashMap<String, Vec<String>>,
    pub embedded: RefCell<Vec<String>>,
}

impl MockBackend {
    pub fn new() -> MockBackend {
        MockBackend {
            embeddings: Default::default(),
            token_sims: Default::default(),
            senses: Default::default(),
            embedded: RefCell::new(Vec::new()),
        }
    }

    pub fn with_embedding(mut self, text: &str, vector: &[f32]) -> MockBackend {
        self.embeddings.insert(text.to_owned(), vector.to_vec());
        self
    }

    pub fn with_token_sim(mut self, a: &str, b: &str, sim: f64) -> MockBackend {
        self.token_sims.insert((a.to_owned(), b.to_owned()), sim);
        self
    }

    pub fn with_senses(mut self, word: &str, senses: &[&str]) -> MockBackend {
        self.senses.insert(word.to_owned(), senses.iter().map(|s| s.to_string()).collect());
        self
    }
}

impl SimilarityBackend for MockBackend {
    fn embed(&self, text: &str) -> Result<Array1<f32>> {
        self.embedded.borrow_mut().push(text.to_owned());
        Ok(match self.embeddings.get(text) {
            None => Array1::zeros(2),
            Some(v) => Array1::from(v.clone())
        })
    }

    fn analyze(&self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|w| {
                let pos = match w {
                    "the" | "a" => Pos::Determiner,
                    "on" | "at" | "of" => Pos::Adposition,
                    _ => Pos::Noun
                };
                Token::new(w, pos)
            })
            .collect()
    }

    fn token_similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        *self.token_sims.get(&(a.to_owned(), b.to_owned())).unwrap_or(&0.0)
    }

    fn shares_taxonomy_sense(&self, a: &str, b: &str) -> bool {
        if a == b {
            return true;
        }
        match (self.senses.get(a), self.senses.get(b)) {
            (Some(x), Some(y)) => x.iter().any(|s| y.contains(s)),
            _ => false
        }
    }
}
