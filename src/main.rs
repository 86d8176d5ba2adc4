//! `id3` command line tool
//!
//! Reads a problem from stdin. Without `-t` a tree is grown and printed along
//! with its json form, with `-t` a saved classifier labels the examples.
use id3tree::constants::{LABEL_FEATURE, NO_DATA_LABEL};
use id3tree::metrics::classification::confusion_pairs;
use id3tree::{Id3Classifier, ModelIO, Problem};
use std::error::Error;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;

struct Args {
    tree: Option<PathBuf>,
    output: Option<PathBuf>,
    label: String,
    quiet: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut tree = None;
    let mut output = None;
    let mut label = LABEL_FEATURE.to_string();
    let mut quiet = false;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-t" | "--tree" => tree = Some(PathBuf::from(it.next().ok_or("-t requires a file")?)),
            "-o" | "--output" => output = Some(PathBuf::from(it.next().ok_or("-o requires a file")?)),
            "-l" | "--label" => label = it.next().ok_or("-l requires a feature name")?,
            "-q" | "--quiet" => quiet = true,
            "-h" | "--help" => print_help_and_exit(),
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(Args {
        tree,
        output,
        label,
        quiet,
    })
}

fn print_help_and_exit() -> ! {
    println!(
        "id3 < PROBLEM\n\n  Grows an ID3 decision tree on the problem read from stdin.\n\n  -t, --tree FILE     classify the examples with the classifier saved in FILE\n  -o, --output FILE   save the grown classifier to FILE\n  -l, --label NAME    name of the label feature (default: {})\n  -q, --quiet         do not print the gain trace\n  -h, --help          print this help\n",
        LABEL_FEATURE
    );
    process::exit(0)
}

fn build(args: &Args) -> Result<(), Box<dyn Error>> {
    let problem = Problem::from_reader(BufReader::new(io::stdin()), &args.label)?;
    let mut model = Id3Classifier::default()
        .set_label_feature(&args.label)
        .set_record_trace(!args.quiet);
    model.fit(&problem)?;
    print!("{}", model.trace());
    let tree = model.tree()?;
    print!("{}", tree);
    println!();
    println!("{}", tree.json_dump()?);
    if let Some(path) = &args.output {
        model.save_model(path)?;
    }
    Ok(())
}

fn classify(args: &Args, path: &Path) -> Result<(), Box<dyn Error>> {
    let model = match Id3Classifier::load_model(path) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("ERROR: unable to open {}", path.display());
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let problem = Problem::from_reader(BufReader::new(io::stdin()), &model.cfg.label_feature)?;
    let (predictions, evaluation) = model.evaluate(problem.examples(), true)?;
    for (example, prediction) in problem.examples().iter().zip(predictions.iter()) {
        println!("{}{}", example.display(problem.domains()), prediction);
    }
    if !args.quiet {
        println!();
        println!("{}", evaluation);
        for ((actual, predicted), n) in confusion_pairs(&predictions) {
            println!("{} -> {}: {}", actual, predicted.as_deref().unwrap_or(NO_DATA_LABEL), n);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            process::exit(2);
        }
    };
    match &args.tree {
        Some(path) => classify(&args, path),
        None => build(&args),
    }
}
