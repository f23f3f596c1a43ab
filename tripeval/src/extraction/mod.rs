pub mod scene_graph;
pub mod spice;

pub use self::scene_graph::{ SceneGraph, SGObject, SGRelationship };
pub use self::spice::{ SpiceResults, SpiceInput, SpiceOutput };

use errors::*;
use tuples::{ Arity, TupleCollection };

/// Turns descriptions and scene graphs into deduplicated collections of tuples
pub trait TupleExtractor {
    fn extract_from_text(&self, text: &str) -> Result<TupleCollection>;

    fn extract_from_scene_graph(&self, sg: &SceneGraph) -> TupleCollection {
        sg.tuples(&Arity::all())
    }
}
