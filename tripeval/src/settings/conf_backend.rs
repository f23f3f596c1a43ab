use std::fmt;

/// Resources of the similarity backend
#[derive(Deserialize, Clone)]
pub struct BackendConf {
    // word vectors, GloVe/word2vec text format
    pub vectors: String,
    // synset table, JSON
    #[serde(default)]
    pub synsets: Option<String>,
    // tab-separated word/tag lexicon
    #[serde(default)]
    pub pos_lexicon: Option<String>,
}

impl BackendConf {
    pub fn default() -> BackendConf {
        BackendConf {
            vectors: "data/vectors.txt".to_owned(),
            synsets: Some("data/synsets.json".to_owned()),
            pos_lexicon: None
        }
    }
}

impl fmt::Debug for BackendConf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, r#"
    vectors     : {}
    synsets     : {:?}
    pos_lexicon : {:?}"#,
               self.vectors,
               self.synsets,
               self.pos_lexicon)
    }
}
