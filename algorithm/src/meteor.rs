use porter;

/// Parameters of METEOR: `alpha` weights precision against recall in the F-mean,
/// `beta` and `gamma` shape the fragmentation penalty
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct MeteorParams {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl MeteorParams {
    pub fn default() -> MeteorParams {
        MeteorParams { alpha: 0.9, beta: 3.0, gamma: 0.5 }
    }
}

type EnumWords = Vec<(usize, String)>;

/// Greedy matching of words (scanned from the end of both lists). Matched words are removed from the lists.
/// Returned pairs are (hypothesis index, reference index).
fn match_enums<F>(hypothesis: &mut EnumWords, reference: &mut EnumWords, is_match: F) -> Vec<(usize, usize)>
    where F: Fn(&str, &str) -> bool
{
    let mut word_match = Vec::new();
    let mut i = hypothesis.len();
    while i > 0 {
        i -= 1;
        let found = (0..reference.len()).rev().find(|&j| is_match(&hypothesis[i].1, &reference[j].1));
        if let Some(j) = found {
            word_match.push((hypothesis[i].0, reference[j].0));
            hypothesis.remove(i);
            reference.remove(j);
        }
    }

    word_match
}

/// Align hypothesis and reference words in three stages: exact match, stem match and synonym match.
///
/// The result is sorted by hypothesis index.
pub fn align_words<F>(hypothesis: &[String], reference: &[String], is_synonym: F) -> Vec<(usize, usize)>
    where F: Fn(&str, &str) -> bool
{
    let mut hyp: EnumWords = hypothesis.iter().cloned().enumerate().collect();
    let mut refs: EnumWords = reference.iter().cloned().enumerate().collect();

    let mut matches = match_enums(&mut hyp, &mut refs, |a, b| a == b);

    // the synonym stage runs on the stems of the words left over
    let mut hyp: EnumWords = hyp.into_iter().map(|(i, w)| (i, porter::stem(&w))).collect();
    let mut refs: EnumWords = refs.into_iter().map(|(i, w)| (i, porter::stem(&w))).collect();
    matches.extend(match_enums(&mut hyp, &mut refs, |a, b| a == b));
    matches.extend(match_enums(&mut hyp, &mut refs, |a, b| is_synonym(a, b)));

    matches.sort_by_key(|m| m.0);
    matches
}

/// Number of chunks: maximal runs of matches that are contiguous in both hypothesis and reference
pub fn count_chunks(matches: &[(usize, usize)]) -> usize {
    let mut i = 0;
    let mut chunks = 1;
    while i + 1 < matches.len() {
        if matches[i + 1].0 == matches[i].0 + 1 && matches[i + 1].1 == matches[i].1 + 1 {
            i += 1;
            continue;
        }
        i += 1;
        chunks += 1;
    }
    chunks
}

/// METEOR score of a hypothesis against a single reference, both already tokenized.
///
/// The score isn't symmetric, and the self-score of an n-words sentence is `1 - gamma * (1/n)^beta`, not 1.
pub fn single_meteor_score<F>(reference: &[String], hypothesis: &[String], params: &MeteorParams, is_synonym: F) -> f64
    where F: Fn(&str, &str) -> bool
{
    let matches = align_words(hypothesis, reference, is_synonym);
    let matches_count = matches.len() as f64;
    if matches.is_empty() {
        return 0.0;
    }

    let precision = matches_count / hypothesis.len() as f64;
    let recall = matches_count / reference.len() as f64;
    let fmean = precision * recall / (params.alpha * precision + (1.0 - params.alpha) * recall);
    let frag_frac = count_chunks(&matches) as f64 / matches_count;
    let penalty = params.gamma * frag_frac.powf(params.beta);

    (1.0 - penalty) * fmean
}
