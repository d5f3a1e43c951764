const PROGRAM: &str = "shiftor";

use shiftor::prelude::*;
use std::{
    env,
    fs::File,
    io::{self, BufWriter, Write},
};

fn usage() -> ! {
    eprintln!("\nUsage: {PROGRAM} <text_file> <pattern_file> [output_file] [--trace]\n");
    eprintln!("Writes the 1-based start of every occurrence of the pattern in the text,");
    eprintln!("one per line, to the output file or stdout. With --trace, every scan step");
    eprintln!("is printed to stderr.\n");
    std::process::exit(2);
}

fn main() {
    let mut trace = false;
    let mut paths = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--trace" => trace = true,
            "-h" | "--help" => usage(),
            _ => paths.push(arg),
        }
    }

    let (text_file, pattern_file, output_file) = match paths.as_slice() {
        [t, p] => (t, p, None),
        [t, p, o] => (t, p, Some(o)),
        _ => usage(),
    };

    let text = read_trimmed(text_file).unwrap_or_die(&format!("Couldn't read the text file '{text_file}'"));
    let pattern = read_trimmed(pattern_file).unwrap_or_die(&format!("Couldn't read the pattern file '{pattern_file}'"));

    let table = build_table(&pattern).unwrap_or_die("Invalid pattern");
    let positions = if trace {
        let mut observer = TraceWriter::new(io::stderr().lock());
        let positions = find_matches_observed(&text, &pattern, &table, &mut observer).unwrap_or_die("Invalid text");
        observer.finish().unwrap_or_die("Couldn't write the trace");
        positions
    } else {
        find_matches(&text, &pattern, &table).unwrap_or_die("Invalid text")
    };

    let writer: Box<dyn Write> = match output_file {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).unwrap_or_die(&format!("Couldn't create the output file '{path}'")),
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    write_positions(writer, &positions).unwrap_or_fail();
}
