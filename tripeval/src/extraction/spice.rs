use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use fnv::FnvHashMap;
use serde_json;
use serde::de::DeserializeOwned;

use errors::*;
use tuples::{ Arity, Tuple, TupleCollection };
use super::TupleExtractor;

/// One record of the file given to the extraction tool
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpiceInput {
    pub image_id: serde_json::Value,
    #[serde(default)]
    pub test: String,
    pub refs: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpiceTuple {
    pub tuple: Tuple,
}

/// One record of the file written by the extraction tool (run with `-detailed -subset`)
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SpiceOutput {
    pub image_id: serde_json::Value,
    #[serde(default)]
    pub ref_tuples: Vec<SpiceTuple>,
}

/// Tuples extracted beforehand by the extraction tool, looked up by the text they were extracted from
pub struct SpiceResults {
    text2tuples: FnvHashMap<String, TupleCollection>
}

fn read_json<T: DeserializeOwned>(fpath: &Path) -> Result<T> {
    let reader = BufReader::new(File::open(fpath)
        .chain_err(|| format!("Cannot open extraction file: {:?}", fpath))?);
    let value = serde_json::from_reader(reader)
        .chain_err(|| format!("Invalid extraction file: {:?}", fpath))?;
    Ok(value)
}

/// Image ids are numbers or strings depending on the file, `2345` and `"2345"` are the same image
fn image_key(image_id: &serde_json::Value) -> String {
    match *image_id {
        serde_json::Value::String(ref id) => id.trim().to_owned(),
        ref id => id.to_string()
    }
}

/// The tool writes attribute tuples as (object, attribute), scene graphs give (attribute, object)
fn normalize(tuple: Tuple) -> Tuple {
    if tuple.arity() == Arity::Attribute {
        let elements = tuple.elements();
        Tuple::attribute(&elements[1], &elements[0])
    } else {
        tuple
    }
}

impl SpiceResults {
    pub fn from_files(input_file: &Path, output_file: &Path) -> Result<SpiceResults> {
        let inputs: Vec<SpiceInput> = read_json(input_file)?;
        let outputs: Vec<SpiceOutput> = read_json(output_file)?;
        Ok(SpiceResults::from_records(inputs, outputs))
    }

    /// Join the records by image id. The tuples of an image are the tuples of all of its reference texts.
    pub fn from_records(inputs: Vec<SpiceInput>, outputs: Vec<SpiceOutput>) -> SpiceResults {
        let mut image2tuples: FnvHashMap<String, TupleCollection> = Default::default();
        for output in outputs {
            let mut tuples: TupleCollection = output.ref_tuples.into_iter().map(|t| normalize(t.tuple)).collect();
            tuples.dedup();
            image2tuples.insert(image_key(&output.image_id), tuples);
        }

        let mut text2tuples: FnvHashMap<String, TupleCollection> = Default::default();
        for input in inputs {
            match image2tuples.get(&image_key(&input.image_id)) {
                None => warn!("No extraction output for image: {}", input.image_id),
                Some(tuples) => {
                    for text in input.refs {
                        text2tuples.insert(text.trim().to_owned(), tuples.clone());
                    }
                }
            }
        }

        SpiceResults { text2tuples }
    }

    pub fn len(&self) -> usize {
        self.text2tuples.len()
    }
}

impl TupleExtractor for SpiceResults {
    fn extract_from_text(&self, text: &str) -> Result<TupleCollection> {
        match self.text2tuples.get(text.trim()) {
            None => Err(ErrorKind::MissingExtraction(text.to_owned()).into()),
            Some(tuples) => Ok(tuples.clone())
        }
    }
}
