use algorithm::meteor::MeteorParams;

use errors::*;
use extraction::SceneGraph;
use settings::Settings;
use similarity::{ MethodsByArity, SimilarityBackend, SimilarityMethod, TripletComparator };
use tuples::{ Arity, Tuple, TupleCollection };
use super::mean;

/// Recall score of one source tuple
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TupleScore {
    pub tuple: Tuple,
    pub arity: Arity,
    pub method: SimilarityMethod,
    pub score: f64,
}

/// Scores of all source tuples: arity 1 first, then arity 2, then arity 3
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecallReport {
    pub scores: Vec<TupleScore>
}

impl RecallReport {
    pub fn scores(&self) -> Vec<f64> {
        self.scores.iter().map(|s| s.score).collect()
    }

    pub fn mean(&self) -> f64 {
        mean(&self.scores())
    }

    pub fn n_tuples_of(&self, arity: Arity) -> usize {
        self.scores.iter().filter(|s| s.arity == arity).count()
    }

    /// Mean recall of an arity class, 0 if there is no source tuple of this arity
    pub fn mean_of(&self, arity: Arity) -> f64 {
        mean(&self.scores.iter().filter(|s| s.arity == arity).map(|s| s.score).collect::<Vec<_>>())
    }
}

/// Recall of source tuples in destination tuples: a source tuple is scored by its best match
pub struct TripletEvaluation<'a> {
    comparator: TripletComparator<'a>
}

impl<'a> TripletEvaluation<'a> {
    pub fn new(backend: &'a dyn SimilarityBackend, meteor: MeteorParams) -> TripletEvaluation<'a> {
        TripletEvaluation { comparator: TripletComparator::new(backend, meteor) }
    }

    pub fn from_settings(backend: &'a dyn SimilarityBackend, settings: &Settings) -> TripletEvaluation<'a> {
        TripletEvaluation::new(backend, settings.meteor)
    }

    pub fn get_comparator(&self) -> &TripletComparator<'a> {
        &self.comparator
    }

    /// Best similarity of `src` against tuples of `dst`, 0 if `dst` is empty.
    ///
    /// A NaN similarity, which a backend may produce from degenerate vectors, counts as 0.
    pub fn recall_triplet(&self, src: &Tuple, dst: &TupleCollection, method: SimilarityMethod) -> Result<f64> {
        let mut best: Option<f64> = None;
        for x in dst {
            let mut sim = self.comparator.compare_triplet(src, x, method)?;
            if sim.is_nan() {
                sim = 0.0;
            }
            best = Some(best.map_or(sim, |b| b.max(sim)));
        }
        Ok(best.unwrap_or(0.0))
    }

    /// Recall of each tuple of `src`, in the same order
    pub fn recall_triplets(&self, src: &TupleCollection, dst: &TupleCollection, method: SimilarityMethod) -> Result<Vec<f64>> {
        src.iter()
            .map(|x| self.recall_triplet(x, dst, method))
            .collect()
    }

    pub fn recall_triplets_mean(&self, src: &TupleCollection, dst: &TupleCollection, method: SimilarityMethod) -> Result<f64> {
        Ok(mean(&self.recall_triplets(src, dst, method)?))
    }

    /// Score every source tuple against the destination tuples of the same arity, using the method of that arity.
    ///
    /// Scores of arity 1 tuples come first, then arity 2, then arity 3.
    pub fn total_recall_triplets(&self, src_triplets: &TupleCollection, dst_triplets: &TupleCollection, methods: &MethodsByArity) -> Result<Vec<f64>> {
        Ok(self.total_recall_report(src_triplets, dst_triplets, methods)?.scores())
    }

    pub fn total_recall_report(&self, src_triplets: &TupleCollection, dst_triplets: &TupleCollection, methods: &MethodsByArity) -> Result<RecallReport> {
        let mut scores = Vec::with_capacity(src_triplets.len());

        for &arity in Arity::all().iter() {
            let src_i = src_triplets.of_arity(arity);
            let dst_i = dst_triplets.of_arity(arity);
            let method = methods.get(arity);
            debug!("Recall of {} tuples of arity {} against {} tuples, method: {}",
                   src_i.len(), arity.len(), dst_i.len(), method);

            let recalls = self.recall_triplets(&src_i, &dst_i, method)?;
            scores.extend(src_i.iter().zip(recalls.into_iter())
                .map(|(tuple, score)| TupleScore { tuple: tuple.clone(), arity, method, score }));
        }

        Ok(RecallReport { scores })
    }

    /// Recall of the tuples of a scene graph (restricted to `arities`) in the tuples extracted from a paragraph
    pub fn recall_paragraph_sg(&self, paragraph_tuples: &TupleCollection, sg: &SceneGraph, methods: &MethodsByArity, arities: &[Arity]) -> Result<RecallReport> {
        let sg_tuples = sg.tuples(arities);
        debug!("[image {}] {} scene graph tuples, {} paragraph tuples", sg.image_id, sg_tuples.len(), paragraph_tuples.len());
        self.total_recall_report(&sg_tuples, paragraph_tuples, methods)
    }
}
