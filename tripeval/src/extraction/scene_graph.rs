use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use fnv::FnvHashMap;
use serde_json;

use errors::*;
use tuples::{ Arity, Tuple, TupleCollection };

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SGObject {
    pub object_id: i64,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SGRelationship {
    pub subject_id: i64,
    pub predicate: String,
    pub object_id: i64,
}

/// Scene graph of an image, in the Visual Genome JSON layout
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SceneGraph {
    pub image_id: i64,
    #[serde(default)]
    pub objects: Vec<SGObject>,
    #[serde(default)]
    pub relationships: Vec<SGRelationship>,
}

impl SGObject {
    pub fn name(&self) -> Option<&str> {
        self.names.first().map(|s| s.as_str())
    }
}

impl SceneGraph {
    pub fn from_file(fpath: &Path) -> Result<SceneGraph> {
        let reader = BufReader::new(File::open(fpath)
            .chain_err(|| format!("Cannot open scene graph: {:?}", fpath))?);
        let sg = serde_json::from_reader(reader)
            .chain_err(|| format!("Invalid scene graph: {:?}", fpath))?;
        Ok(sg)
    }

    /// Object tuples `(name)`, attribute tuples `(attribute, name)` then relation tuples
    /// `(subject_name, predicate, object_name)`, deduplicated, restricted to the given arities.
    ///
    /// An object is named by its first name; objects without names don't produce any tuple.
    pub fn tuples(&self, arities: &[Arity]) -> TupleCollection {
        let mut obj_tuples = Vec::new();
        let mut attr_tuples = Vec::new();
        let mut rel_tuples = Vec::new();

        let mut id2name: FnvHashMap<i64, &str> = Default::default();
        for obj in &self.objects {
            match obj.name() {
                None => {
                    debug!("[image {}] Skip object {} without name", self.image_id, obj.object_id);
                },
                Some(name) => {
                    id2name.insert(obj.object_id, name);
                    obj_tuples.push(Tuple::object(name));
                    for attr in &obj.attributes {
                        attr_tuples.push(Tuple::attribute(attr, name));
                    }
                }
            }
        }

        for rel in &self.relationships {
            match (id2name.get(&rel.subject_id), id2name.get(&rel.object_id)) {
                (Some(subject), Some(object)) => rel_tuples.push(Tuple::relation(subject, &rel.predicate, object)),
                _ => warn!("[image {}] Skip relationship {} -{}-> {}: unknown or unnamed object",
                           self.image_id, rel.subject_id, rel.predicate, rel.object_id)
            }
        }

        let mut tuples: TupleCollection = obj_tuples.into_iter()
            .chain(attr_tuples.into_iter())
            .chain(rel_tuples.into_iter())
            .collect();
        tuples.dedup();
        tuples.filter_arities(arities)
    }
}
