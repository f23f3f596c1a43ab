use algorithm::meteor::MeteorParams;
use tripeval::prelude::*;
use super::mock::MockBackend;
use assert_close;

const ALL_METHODS: [SimilarityMethod; 4] = [
    SimilarityMethod::Embedding, SimilarityMethod::LexicalOverlap, SimilarityMethod::Taxonomy, SimilarityMethod::TokenSimilarity
];

fn backend() -> MockBackend {
    MockBackend::new()
        .with_embedding("cat", &[1.0, 0.0])
        .with_embedding("kitten", &[0.6, 0.8])
        .with_embedding("red car", &[0.0, 2.0])
        .with_embedding("man rides bike", &[3.0, 4.0])
        .with_token_sim("on", "at", 0.4)
        .with_token_sim("cat", "kitten", 0.7)
        .with_token_sim("car", "automobile", 0.9)
        .with_senses("car", &["car.n.01"])
        .with_senses("automobile", &["car.n.01"])
}

#[test]
fn test_self_similarity() {
    let backend = backend();
    let comparator = TripletComparator::new(&backend, MeteorParams::default());

    for t in &[Tuple::object("cat"), Tuple::attribute("red", "car"), Tuple::relation("man", "rides", "bike")] {
        assert_close(comparator.compare_triplet(t, t, SimilarityMethod::Embedding).unwrap(), 1.0);
        assert_close(comparator.compare_triplet(t, t, SimilarityMethod::Taxonomy).unwrap(), 1.0);
        assert_close(comparator.compare_triplet(t, t, SimilarityMethod::TokenSimilarity).unwrap(), 1.0);
    }

    // METEOR is not reflexive: its fragmentation penalty applies even to identical sequences
    let t = Tuple::relation("man", "rides", "bike");
    assert_close(comparator.compare_triplet(&t, &t, SimilarityMethod::LexicalOverlap).unwrap(), 1.0 - 0.5 / 27.0);
    let t = Tuple::object("cat");
    assert_close(comparator.compare_triplet(&t, &t, SimilarityMethod::LexicalOverlap).unwrap(), 0.5);
}

#[test]
fn test_different_arity_is_zero() {
    let backend = backend();
    let comparator = TripletComparator::new(&backend, MeteorParams::default());
    let pairs = [
        (Tuple::object("car"), Tuple::attribute("red", "car")),
        (Tuple::attribute("red", "car"), Tuple::relation("red", "car", "car")),
        (Tuple::relation("man", "rides", "bike"), Tuple::object("man")),
    ];

    for &method in ALL_METHODS.iter() {
        for &(ref t1, ref t2) in pairs.iter() {
            assert_eq!(comparator.compare_triplet(t1, t2, method).unwrap(), 0.0);
            assert_eq!(comparator.compare_triplet(t2, t1, method).unwrap(), 0.0);
        }
    }
    // nothing is embedded when arity differs
    assert!(backend.embedded.borrow().is_empty());
}

#[test]
fn test_embedding_is_cosine_of_lowercase_phrases() {
    let backend = backend();
    let comparator = TripletComparator::new(&backend, MeteorParams::default());
    let sim = comparator.compare_triplet(&Tuple::object("Cat"), &Tuple::object("KITTEN"), SimilarityMethod::Embedding).unwrap();
    assert_close(sim, 0.6);
    assert_eq!(*backend.embedded.borrow(), vec!["cat".to_owned(), "kitten".to_owned()]);

    let sim = comparator.compare_triplet(&Tuple::object("cat"), &Tuple::object("unknown"), SimilarityMethod::Embedding).unwrap();
    assert_eq!(sim, 0.0);
}

#[test]
fn test_taxonomy_requires_every_position() {
    let backend = backend();
    let comparator = TripletComparator::new(&backend, MeteorParams::default());
    let red_car = Tuple::attribute("red", "car");

    assert_eq!(comparator.compare_triplet(&red_car, &Tuple::attribute("red", "automobile"), SimilarityMethod::Taxonomy).unwrap(), 1.0);
    assert_eq!(comparator.compare_triplet(&red_car, &Tuple::attribute("blue", "automobile"), SimilarityMethod::Taxonomy).unwrap(), 0.0);
    // a multi-word element matches when any of its words shares a sense
    assert_eq!(comparator.compare_triplet(&red_car, &Tuple::attribute("red", "sports automobile"), SimilarityMethod::Taxonomy).unwrap(), 1.0);
}

#[test]
fn test_token_similarity_is_product_of_elements() {
    let backend = backend();
    let comparator = TripletComparator::new(&backend, MeteorParams::default());

    let sim = comparator.compare_triplet(&Tuple::attribute("red", "car"), &Tuple::attribute("red", "automobile"), SimilarityMethod::TokenSimilarity).unwrap();
    assert_close(sim, 0.9);
    let sim = comparator.compare_triplet(&Tuple::relation("cat", "on", "car"), &Tuple::relation("kitten", "at", "automobile"), SimilarityMethod::TokenSimilarity).unwrap();
    assert_close(sim, 0.7 * 0.4 * 0.9);
}

#[test]
fn test_element_similarity() {
    let backend = backend();
    let comparator = TripletComparator::new(&backend, MeteorParams::default());

    // function words of multi-word elements are skipped
    assert_close(comparator.element_similarity("on the car", "automobile"), 0.9);
    assert_close(comparator.element_similarity("cat car", "kitten"), 0.35);
    // a single function word still counts
    assert_close(comparator.element_similarity("on", "at"), 0.4);
    // nothing to average
    assert_eq!(comparator.element_similarity("on the", "at"), 0.0);
    assert_eq!(comparator.element_similarity("car", ""), 0.0);
}
