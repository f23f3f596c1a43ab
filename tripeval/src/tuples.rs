use std::convert::TryFrom;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::iter::FromIterator;
use std::path::Path;
use std::slice;
use fnv::FnvHashSet;
use serde_json;

use errors::*;

/// Role of a tuple, given by its number of elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Arity {
    // (name)
    Object = 1,
    // (attribute, object_name)
    Attribute = 2,
    // (subject_name, predicate, object_name)
    Relation = 3
}

impl Arity {
    pub fn all() -> [Arity; 3] {
        [Arity::Object, Arity::Attribute, Arity::Relation]
    }

    pub fn from_len(n: usize) -> Result<Arity> {
        match n {
            1 => Ok(Arity::Object),
            2 => Ok(Arity::Attribute),
            3 => Ok(Arity::Relation),
            _ => Err(ErrorKind::InvalidTupleArity(n).into())
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<usize> for Arity {
    type Error = Error;

    fn try_from(n: usize) -> Result<Arity> {
        Arity::from_len(n)
    }
}

impl From<Arity> for usize {
    fn from(arity: Arity) -> usize {
        arity.len()
    }
}

/// An object mention, an attribute-object pair or a subject-predicate-object relation.
///
/// Elements are fixed at creation, so is the arity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Tuple {
    elements: Vec<String>
}

impl Tuple {
    pub fn new(elements: Vec<String>) -> Result<Tuple> {
        Arity::from_len(elements.len())?;
        Ok(Tuple { elements })
    }

    pub fn object(name: &str) -> Tuple {
        Tuple { elements: vec![name.to_owned()] }
    }

    pub fn attribute(attribute: &str, object_name: &str) -> Tuple {
        Tuple { elements: vec![attribute.to_owned(), object_name.to_owned()] }
    }

    pub fn relation(subject_name: &str, predicate: &str, object_name: &str) -> Tuple {
        Tuple { elements: vec![subject_name.to_owned(), predicate.to_owned(), object_name.to_owned()] }
    }

    pub fn arity(&self) -> Arity {
        match self.elements.len() {
            1 => Arity::Object,
            2 => Arity::Attribute,
            _ => Arity::Relation
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn elements(&self) -> &[String] {
        &self.elements
    }
}

impl TryFrom<Vec<String>> for Tuple {
    type Error = Error;

    fn try_from(elements: Vec<String>) -> Result<Tuple> {
        Tuple::new(elements)
    }
}

impl From<Tuple> for Vec<String> {
    fn from(tuple: Tuple) -> Vec<String> {
        tuple.elements
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({})", self.elements.join(", "))
    }
}

/// Ordered collection of tuples. Scores computed over a collection follow its iteration order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TupleCollection {
    tuples: Vec<Tuple>
}

impl TupleCollection {
    pub fn new() -> TupleCollection {
        TupleCollection { tuples: Vec::new() }
    }

    pub fn from_file(fpath: &Path) -> Result<TupleCollection> {
        let reader = BufReader::new(File::open(fpath)
            .chain_err(|| format!("Cannot open tuple file: {:?}", fpath))?);
        let tuples = serde_json::from_reader(reader)
            .chain_err(|| format!("Invalid tuple file: {:?}", fpath))?;
        Ok(tuples)
    }

    pub fn push(&mut self, tuple: Tuple) {
        self.tuples.push(tuple);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tuples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<Tuple> {
        self.tuples.iter()
    }

    /// Remove duplicated tuples, keeping the first occurrence
    pub fn dedup(&mut self) {
        let mut seen: FnvHashSet<Tuple> = Default::default();
        self.tuples.retain(|t| seen.insert(t.clone()));
    }

    pub fn of_arity(&self, arity: Arity) -> TupleCollection {
        self.iter().filter(|t| t.arity() == arity).cloned().collect()
    }

    pub fn filter_arities(&self, arities: &[Arity]) -> TupleCollection {
        self.iter().filter(|t| arities.contains(&t.arity())).cloned().collect()
    }

    /// Split into the three arity classes (in order 1, 2, 3), each class keeps the collection's order
    pub fn partition_by_arity(&self) -> Vec<(Arity, TupleCollection)> {
        Arity::all().iter().map(|&arity| (arity, self.of_arity(arity))).collect()
    }
}

impl From<Vec<Tuple>> for TupleCollection {
    fn from(tuples: Vec<Tuple>) -> TupleCollection {
        TupleCollection { tuples }
    }
}

impl FromIterator<Tuple> for TupleCollection {
    fn from_iter<I: IntoIterator<Item=Tuple>>(iter: I) -> TupleCollection {
        TupleCollection { tuples: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a TupleCollection {
    type Item = &'a Tuple;
    type IntoIter = slice::Iter<'a, Tuple>;

    fn into_iter(self) -> Self::IntoIter {
        self.tuples.iter()
    }
}
