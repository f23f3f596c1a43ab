// Create the Error, ErrorKind, ResultExt, and Result types
error_chain! {
    foreign_links {
        Io(::std::io::Error);
        Json(::serde_json::Error);
        Yaml(::serde_yaml::Error);
        Csv(::csv::Error);
        ParseFloat(::std::num::ParseFloatError);
    }

    errors {
        UnknownSimilarityMethod(name: String) {
            description("unknown similarity method")
            display("Unknown similarity method: {}", name)
        }
        InvalidTupleArity(arity: usize) {
            description("invalid tuple arity")
            display("Invalid tuple arity: {} (a tuple has 1 to 3 elements)", arity)
        }
        BackendUnavailable(reason: String) {
            description("similarity backend unavailable")
            display("Similarity backend unavailable: {}", reason)
        }
        MissingExtraction(text: String) {
            description("no extracted tuples for text")
            display("No extracted tuples for text: {:?}", text)
        }
    }
}
