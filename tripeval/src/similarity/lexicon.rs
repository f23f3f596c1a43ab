use std::fs::File;
use std::io::{ BufRead, BufReader };
use std::path::Path;
use fnv::{ FnvHashMap, FnvHashSet };
use ndarray::Array1;
use serde_json;
use csv;
use algorithm::porter;
use algorithm::string::Tokenizer;

use errors::*;
use settings::BackendConf;
use super::backend::*;

/// Function words recognised without a lexicon
const CLOSED_CLASS_WORDS: &[(&str, Pos)] = &[
    ("a", Pos::Determiner), ("an", Pos::Determiner), ("the", Pos::Determiner), ("this", Pos::Determiner),
    ("that", Pos::Determiner), ("these", Pos::Determiner), ("those", Pos::Determiner), ("some", Pos::Determiner),
    ("each", Pos::Determiner), ("every", Pos::Determiner), ("no", Pos::Determiner), ("another", Pos::Determiner),
    ("of", Pos::Adposition), ("in", Pos::Adposition), ("on", Pos::Adposition), ("at", Pos::Adposition),
    ("by", Pos::Adposition), ("with", Pos::Adposition), ("from", Pos::Adposition), ("for", Pos::Adposition),
    ("into", Pos::Adposition), ("onto", Pos::Adposition), ("over", Pos::Adposition), ("under", Pos::Adposition),
    ("above", Pos::Adposition), ("below", Pos::Adposition), ("behind", Pos::Adposition), ("beside", Pos::Adposition),
    ("near", Pos::Adposition), ("next", Pos::Adposition), ("inside", Pos::Adposition), ("outside", Pos::Adposition),
    ("between", Pos::Adposition), ("against", Pos::Adposition), ("along", Pos::Adposition), ("across", Pos::Adposition),
    ("through", Pos::Adposition), ("around", Pos::Adposition), ("atop", Pos::Adposition), ("beneath", Pos::Adposition),
    ("i", Pos::Pronoun), ("he", Pos::Pronoun), ("she", Pos::Pronoun), ("it", Pos::Pronoun), ("they", Pos::Pronoun),
    ("we", Pos::Pronoun), ("you", Pos::Pronoun), ("him", Pos::Pronoun), ("her", Pos::Pronoun), ("them", Pos::Pronoun),
    ("his", Pos::Pronoun), ("its", Pos::Pronoun), ("their", Pos::Pronoun),
    ("and", Pos::Conjunction), ("or", Pos::Conjunction), ("but", Pos::Conjunction), ("while", Pos::Conjunction),
    ("is", Pos::Auxiliary), ("are", Pos::Auxiliary), ("was", Pos::Auxiliary), ("were", Pos::Auxiliary),
    ("be", Pos::Auxiliary), ("been", Pos::Auxiliary), ("being", Pos::Auxiliary), ("has", Pos::Auxiliary),
    ("have", Pos::Auxiliary), ("had", Pos::Auxiliary), ("can", Pos::Auxiliary), ("will", Pos::Auxiliary),
    ("to", Pos::Particle), ("not", Pos::Particle),
];

#[derive(Deserialize)]
#[serde(untagged)]
enum SynsetEntry {
    One(String),
    Many(Vec<String>)
}

/// Similarity backend built from plain resource files: word vectors, a synset table and
/// an optional part-of-speech lexicon. Everything is loaded at construction and runs on the CPU.
pub struct LexiconBackend {
    tokenizer: Tokenizer,
    dim: usize,
    vectors: FnvHashMap<String, Array1<f32>>,
    synsets: FnvHashMap<String, FnvHashSet<String>>,
    pos_lexicon: FnvHashMap<String, Pos>,
    closed_class: FnvHashMap<&'static str, Pos>,
}

impl LexiconBackend {
    pub fn new(dim: usize, vectors: FnvHashMap<String, Array1<f32>>, synsets: FnvHashMap<String, FnvHashSet<String>>, pos_lexicon: FnvHashMap<String, Pos>) -> LexiconBackend {
        LexiconBackend {
            tokenizer: Tokenizer::new(),
            dim,
            vectors,
            synsets,
            pos_lexicon,
            closed_class: CLOSED_CLASS_WORDS.iter().cloned().collect(),
        }
    }

    pub fn from_conf(conf: &BackendConf) -> Result<LexiconBackend> {
        let (dim, vectors) = load_vectors(Path::new(&conf.vectors))
            .chain_err(|| ErrorKind::BackendUnavailable(format!("cannot load word vectors from {}", conf.vectors)))?;
        let synsets = match conf.synsets {
            None => Default::default(),
            Some(ref fpath) => load_synsets(Path::new(fpath))
                .chain_err(|| ErrorKind::BackendUnavailable(format!("cannot load synsets from {}", fpath)))?
        };
        let pos_lexicon = match conf.pos_lexicon {
            None => Default::default(),
            Some(ref fpath) => load_pos_lexicon(Path::new(fpath))
                .chain_err(|| ErrorKind::BackendUnavailable(format!("cannot load pos lexicon from {}", fpath)))?
        };

        info!("Loaded similarity backend: {} word vectors (dim={}), {} synset entries, {} pos entries. Running on CPU",
              vectors.len(), dim, synsets.len(), pos_lexicon.len());
        Ok(LexiconBackend::new(dim, vectors, synsets, pos_lexicon))
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Look up a word, then its stem
    fn lookup<'a, V>(map: &'a FnvHashMap<String, V>, word: &str) -> Option<&'a V> {
        let word = word.to_lowercase();
        map.get(&word).or_else(|| map.get(&porter::stem(&word)))
    }

    pub fn vector(&self, word: &str) -> Option<&Array1<f32>> {
        LexiconBackend::lookup(&self.vectors, word)
    }

    pub fn tag(&self, word: &str) -> Pos {
        let lower = word.to_lowercase();
        if let Some(&pos) = self.pos_lexicon.get(&lower) {
            return pos;
        }
        if let Some(&pos) = self.closed_class.get(lower.as_str()) {
            return pos;
        }
        if !word.chars().any(|c| c.is_alphanumeric()) {
            return Pos::Punctuation;
        }
        if word.chars().all(|c| c.is_numeric()) {
            return Pos::Numeral;
        }
        if lower.len() > 4 && lower.ends_with("ly") {
            return Pos::Adverb;
        }
        if word.chars().next().map_or(false, |c| c.is_uppercase()) {
            return Pos::ProperNoun;
        }
        Pos::Noun
    }
}

impl SimilarityBackend for LexiconBackend {
    /// Mean of the vectors of the known words, zero vector if no word is known
    fn embed(&self, text: &str) -> Result<Array1<f32>> {
        let mut embedding = Array1::zeros(self.dim);
        let mut n_words = 0;
        for token in self.tokenizer.tokenize(text) {
            if let Some(vector) = self.vector(token) {
                embedding += vector;
                n_words += 1;
            }
        }

        if n_words > 0 {
            embedding /= n_words as f32;
        }
        Ok(embedding)
    }

    fn analyze(&self, text: &str) -> Vec<Token> {
        self.tokenizer.tokenize(text).into_iter()
            .map(|w| Token::new(w, self.tag(w)))
            .collect()
    }

    fn token_similarity(&self, a: &str, b: &str) -> f64 {
        if a.to_lowercase() == b.to_lowercase() {
            return 1.0;
        }

        match (self.vector(a), self.vector(b)) {
            (Some(x), Some(y)) => cosine_similarity(x, y).max(0.0).min(1.0),
            _ => 0.0
        }
    }

    fn shares_taxonomy_sense(&self, a: &str, b: &str) -> bool {
        if a.to_lowercase() == b.to_lowercase() {
            return true;
        }

        match (LexiconBackend::lookup(&self.synsets, a), LexiconBackend::lookup(&self.synsets, b)) {
            (Some(x), Some(y)) => !x.is_disjoint(y),
            _ => false
        }
    }
}

/// Read word vectors in the GloVe/word2vec text format: `word v1 v2 ... vd`, an optional `count dim` header
pub fn load_vectors(fpath: &Path) -> Result<(usize, FnvHashMap<String, Array1<f32>>)> {
    let reader = BufReader::new(File::open(fpath)?);
    let mut vectors: FnvHashMap<String, Array1<f32>> = Default::default();
    let mut dim = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let word = match fields.next() {
            None => continue,
            Some(word) => word.to_lowercase()
        };
        let values = fields.map(|v| v.parse::<f32>()).collect::<::std::result::Result<Vec<_>, _>>()
            .chain_err(|| format!("Invalid vector at line {}", i + 1))?;

        if i == 0 && values.len() == 1 && word.parse::<usize>().is_ok() {
            // header line
            continue;
        }
        if dim == 0 {
            dim = values.len();
        }
        if values.len() != dim || dim == 0 {
            bail!("Invalid vector dimension at line {}: expect {}, got {}", i + 1, dim, values.len());
        }

        if values.iter().any(|v| !v.is_finite()) {
            bail!("Non-finite vector value at line {}", i + 1);
        }

        // cased files may hold several forms of a word, the first one wins
        vectors.entry(word).or_insert_with(|| Array1::from(values));
    }

    if vectors.is_empty() {
        bail!("No word vectors in {:?}", fpath);
    }

    debug!("Read {} word vectors from {:?}", vectors.len(), fpath);
    Ok((dim, vectors))
}

/// Read a synset table: `{ "phrase": "synset" }` or `{ "phrase": ["synset", ...] }`
pub fn load_synsets(fpath: &Path) -> Result<FnvHashMap<String, FnvHashSet<String>>> {
    let entries: FnvHashMap<String, SynsetEntry> = serde_json::from_reader(BufReader::new(File::open(fpath)?))?;
    Ok(entries.into_iter()
        .map(|(phrase, entry)| {
            let synsets = match entry {
                SynsetEntry::One(synset) => vec![synset],
                SynsetEntry::Many(synsets) => synsets
            };
            (phrase.to_lowercase(), synsets.into_iter().collect())
        })
        .collect())
}

/// Read a tab-separated `word TAG` lexicon with universal part-of-speech tags
pub fn load_pos_lexicon(fpath: &Path) -> Result<FnvHashMap<String, Pos>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(fpath)?;

    let mut lexicon: FnvHashMap<String, Pos> = Default::default();
    for record in reader.records() {
        let record = record?;
        if record.len() != 2 {
            bail!("Invalid pos lexicon record: {:?}", record);
        }
        let pos = Pos::from_tag(&record[1])
            .ok_or_else(|| Error::from(format!("Unknown pos tag: {}", &record[1])))?;
        lexicon.insert(record[0].to_lowercase(), pos);
    }
    Ok(lexicon)
}
