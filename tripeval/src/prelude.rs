pub use errors::*;
pub use tuples::{ Arity, Tuple, TupleCollection };
pub use similarity::{ SimilarityBackend, SimilarityMethod, MethodsByArity, LexiconBackend, TripletComparator, Token, Pos };
pub use extraction::{ TupleExtractor, SceneGraph, SpiceResults };
pub use evaluation_metrics::{ TripletEvaluation, RecallReport, TupleScore };
pub use settings::{ Settings, Configuration };
pub use utils::Timer;
