extern crate tripeval;

#[macro_use]
extern crate log;
#[cfg_attr(test, macro_use)]
extern crate serde_json;
extern crate csv;
extern crate env_logger;
#[macro_use]
extern crate clap;
#[macro_use]
extern crate prettytable;

use std::path::Path;

use tripeval::prelude::*;

mod evaluation;

fn main() {
    env_logger::init();

    if let Err(ref e) = run() {
        error!("{}", e);
        println!("error: {}", e);
        for e in e.iter().skip(1) {
            println!("caused by: {}", e);
        }

        // The backtrace is not always generated. Try to run with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            println!("{:?}", backtrace);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut timer = Timer::start();

    let app_m = clap_app!(tripeval =>
        (about: "Recall of scene graph tuples in tuples extracted from descriptions")
        (@arg settings: -c +takes_value "settings file")
        (@subcommand recall =>
            (about: "Recall of source tuples in destination tuples")
            (@arg src: -s +required +takes_value "source tuples, JSON list of 1 to 3 strings lists")
            (@arg dst: -d +required +takes_value "destination tuples, same format")
            (@arg output: -o +takes_value "write scores to this file (.csv or .json)")
        )
        (@subcommand recall_sg =>
            (about: "Recall of the tuples of a scene graph in the tuples extracted from a paragraph")
            (@arg scene_graph: -g +required +takes_value "scene graph file")
            (@arg spice_input: -i +required +takes_value "input file of the extraction tool")
            (@arg spice_output: -p +required +takes_value "output file of the extraction tool")
            (@arg text: -t +required +takes_value "the paragraph")
            (@arg output: -o +takes_value "write scores to this file (.csv or .json)")
        )
    ).get_matches();

    let settings = match app_m.value_of("settings") {
        None => Settings::default(),
        Some(fsettings) => Settings::from_file(Path::new(fsettings))?
    };
    debug!("Current settings: {:?}", settings);

    let backend = LexiconBackend::from_conf(&settings.backend)?;
    timer.lap_and_report("Loaded similarity backend");
    let evaluation = TripletEvaluation::from_settings(&backend, &settings);

    let (report, output) = match app_m.subcommand() {
        ("recall", Some(sub_m)) => {
            let src = TupleCollection::from_file(Path::new(sub_m.value_of("src").unwrap()))?;
            let dst = TupleCollection::from_file(Path::new(sub_m.value_of("dst").unwrap()))?;
            (evaluation.total_recall_report(&src, &dst, &settings.methods)?, sub_m.value_of("output"))
        },
        ("recall_sg", Some(sub_m)) => {
            let sg = SceneGraph::from_file(Path::new(sub_m.value_of("scene_graph").unwrap()))?;
            let extractor = SpiceResults::from_files(
                Path::new(sub_m.value_of("spice_input").unwrap()),
                Path::new(sub_m.value_of("spice_output").unwrap()))?;
            let paragraph_tuples = extractor.extract_from_text(sub_m.value_of("text").unwrap())?;
            let report = evaluation.recall_paragraph_sg(&paragraph_tuples, &sg, &settings.methods, &settings.scene_graph.arities)?;
            (report, sub_m.value_of("output"))
        },
        _ => return Err("No subcommand provided".into())
    };

    evaluation::print_report(&report);
    if let Some(foutput) = output {
        evaluation::write_report(&report, Path::new(foutput))?;
    }

    timer.lap_and_report("!! Finish the program !!");
    Ok(())
}
