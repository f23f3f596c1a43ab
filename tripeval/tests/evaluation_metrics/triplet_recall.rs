use algorithm::meteor::MeteorParams;
use ndarray::Array1;
use tripeval::prelude::*;
use similarity::mock::MockBackend;
use assert_close;

fn backend() -> MockBackend {
    MockBackend::new()
        .with_token_sim("cat", "dog", 0.3)
        .with_token_sim("cat", "kitten", 0.7)
        .with_token_sim("cat", "car", 0.1)
        .with_embedding("red car", &[0.0, 1.0])
        .with_embedding("blue car", &[0.6, 0.8])
}

#[test]
fn test_recall_triplet_picks_best_match() {
    let backend = backend();
    let evaluation = TripletEvaluation::new(&backend, MeteorParams::default());
    let dst = TupleCollection::from(vec![Tuple::object("dog"), Tuple::object("kitten"), Tuple::object("car")]);

    let recall = evaluation.recall_triplet(&Tuple::object("cat"), &dst, SimilarityMethod::TokenSimilarity).unwrap();
    assert_eq!(recall, 0.7);
}

#[test]
fn test_empty_collections() {
    let backend = backend();
    let evaluation = TripletEvaluation::new(&backend, MeteorParams::default());
    let empty = TupleCollection::new();
    let dst = TupleCollection::from(vec![Tuple::object("cat")]);

    for method in &[SimilarityMethod::Embedding, SimilarityMethod::LexicalOverlap, SimilarityMethod::Taxonomy, SimilarityMethod::TokenSimilarity] {
        assert_eq!(evaluation.recall_triplet(&Tuple::object("cat"), &empty, *method).unwrap(), 0.0);
        assert_eq!(evaluation.recall_triplets_mean(&empty, &dst, *method).unwrap(), 0.0);
        assert!(evaluation.recall_triplets(&empty, &dst, *method).unwrap().is_empty());
    }
}

#[test]
fn test_recall_triplets_preserves_order() {
    let backend = backend();
    let evaluation = TripletEvaluation::new(&backend, MeteorParams::default());
    let src = TupleCollection::from(vec![Tuple::object("kitten"), Tuple::object("cat"), Tuple::object("dog"), Tuple::object("cat")]);
    let dst = TupleCollection::from(vec![Tuple::object("cat")]);

    let recalls = evaluation.recall_triplets(&src, &dst, SimilarityMethod::TokenSimilarity).unwrap();
    assert_eq!(recalls.len(), src.len());
    // similarities are directional in the mock: only "cat" -> x pairs are known
    assert_eq!(recalls, vec![0.0, 1.0, 0.0, 1.0]);
    assert_close(evaluation.recall_triplets_mean(&src, &dst, SimilarityMethod::TokenSimilarity).unwrap(), 0.5);
}

#[test]
fn test_total_recall_never_compares_across_arities() {
    let backend = backend();
    let evaluation = TripletEvaluation::new(&backend, MeteorParams::default());
    let src = TupleCollection::from(vec![Tuple::object("cat"), Tuple::attribute("red", "car"), Tuple::relation("man", "rides", "bike")]);
    let dst = TupleCollection::from(vec![Tuple::attribute("blue", "car")]);

    let scores = evaluation.total_recall_triplets(&src, &dst, &MethodsByArity::default()).unwrap();
    assert_eq!(scores.len(), 3);
    assert_eq!(scores[0], 0.0);
    assert_close(scores[1], 0.8);
    assert_eq!(scores[2], 0.0);
    assert_eq!(*backend.embedded.borrow(), vec!["red car".to_owned(), "blue car".to_owned()]);
}

#[test]
fn test_total_recall_orders_by_arity_and_uses_method_per_arity() {
    let backend = backend();
    let evaluation = TripletEvaluation::new(&backend, MeteorParams::default());
    let src = TupleCollection::from(vec![
        Tuple::relation("cat", "on", "mat"), Tuple::attribute("red", "car"), Tuple::object("cat"), Tuple::object("tree")
    ]);
    let dst = TupleCollection::from(vec![
        Tuple::object("kitten"), Tuple::attribute("red", "car"), Tuple::relation("cat", "on", "mat")
    ]);
    let methods = MethodsByArity::from_names(&["spacy", "bert", "wordnet"]).unwrap();

    let report = evaluation.total_recall_report(&src, &dst, &methods).unwrap();
    assert_eq!(report.scores.iter().map(|s| s.tuple.clone()).collect::<Vec<_>>(), vec![
        Tuple::object("cat"), Tuple::object("tree"), Tuple::attribute("red", "car"), Tuple::relation("cat", "on", "mat")
    ]);
    assert_eq!(report.scores.iter().map(|s| s.method).collect::<Vec<_>>(), vec![
        SimilarityMethod::TokenSimilarity, SimilarityMethod::TokenSimilarity, SimilarityMethod::Embedding, SimilarityMethod::Taxonomy
    ]);

    let scores = report.scores();
    assert_close(scores[0], 0.7);
    assert_eq!(scores[1], 0.0);
    assert_close(scores[2], 1.0);
    assert_eq!(scores[3], 1.0);
    assert_eq!(evaluation.total_recall_triplets(&src, &dst, &methods).unwrap(), scores);
}

#[test]
fn test_unknown_method_is_rejected() {
    match MethodsByArity::from_names(&["bert", "bert", "word2vec"]) {
        Err(Error(ErrorKind::UnknownSimilarityMethod(ref name), _)) => assert_eq!(name, "word2vec"),
        _ => panic!("expect an invalid argument error")
    }
}

/// Backend whose embedding of every text is degenerate
struct NanBackend(MockBackend);

impl SimilarityBackend for NanBackend {
    fn embed(&self, _text: &str) -> Result<Array1<f32>> {
        Ok(Array1::from(vec![::std::f32::NAN, 1.0]))
    }

    fn analyze(&self, text: &str) -> Vec<Token> {
        self.0.analyze(text)
    }

    fn token_similarity(&self, a: &str, b: &str) -> f64 {
        if a == b { 1.0 } else { ::std::f64::NAN }
    }

    fn shares_taxonomy_sense(&self, a: &str, b: &str) -> bool {
        self.0.shares_taxonomy_sense(a, b)
    }
}

#[test]
fn test_nan_similarity_counts_as_zero() {
    let backend = NanBackend(MockBackend::new());
    let evaluation = TripletEvaluation::new(&backend, MeteorParams::default());
    let dst = TupleCollection::from(vec![Tuple::object("dog")]);

    assert_eq!(evaluation.recall_triplet(&Tuple::object("cat"), &dst, SimilarityMethod::Embedding).unwrap(), 0.0);
    assert_eq!(evaluation.recall_triplet(&Tuple::object("cat"), &dst, SimilarityMethod::TokenSimilarity).unwrap(), 0.0);

    let src = TupleCollection::from(vec![Tuple::object("cat"), Tuple::object("dog")]);
    let report = evaluation.total_recall_report(&src, &dst, &MethodsByArity::uniform(SimilarityMethod::TokenSimilarity)).unwrap();
    assert_eq!(report.scores(), vec![0.0, 1.0]);
    assert_eq!(report.mean(), 0.5);
}

#[test]
fn test_negative_similarity_is_kept() {
    let backend = backend()
        .with_embedding("cat", &[1.0, 0.0])
        .with_embedding("dog", &[-1.0, 0.0]);
    let evaluation = TripletEvaluation::new(&backend, MeteorParams::default());
    let dst = TupleCollection::from(vec![Tuple::object("dog")]);

    let recall = evaluation.recall_triplet(&Tuple::object("cat"), &dst, SimilarityMethod::Embedding).unwrap();
    assert_close(recall, -1.0);
}
