use shiftor::{
    prelude::*,
    search::{BitsView, Quiet, ScanStep},
};

#[test]
fn repeated_symbol_runs() {
    let table = build_table(b"aaa").unwrap();
    let matches = find_matches(b"aaaabaaacaaaaa", b"aaa", &table).unwrap();
    assert_eq!(matches, [0, 1, 5, 9, 10, 11]);
}

#[test]
fn single_occurrence() {
    let table = build_table(b"dadax").unwrap();
    assert_eq!(find_matches(b"xaadadadaxdad", b"dadax", &table).unwrap(), [5]);
}

#[test]
fn degenerate_inputs() {
    let table = build_table(b"abcd").unwrap();
    assert!(find_matches(b"abc", b"abcd", &table).unwrap().is_empty());

    let table = build_table(b"a").unwrap();
    assert!(find_matches(b"", b"a", &table).unwrap().is_empty());

    let table = build_table(b"").unwrap();
    assert!(find_matches(b"abc", b"", &table).unwrap().is_empty());
}

#[test]
fn first_window_and_overlaps() {
    let table = build_table(b"aa").unwrap();
    assert_eq!(find_matches(b"aaaa", b"aa", &table).unwrap(), [0, 1, 2]);
}

#[test]
fn alphabet_edges() {
    assert!(build_table(&[b'!']).is_ok());
    assert!(build_table(&[b'~']).is_ok());
    assert!(matches!(
        build_table(&[b'!' - 1]),
        Err(ShiftOrError::InvalidAlphabet { position: 0, symbol: b' ' })
    ));
    assert!(matches!(
        build_table(&[b'~' + 1]),
        Err(ShiftOrError::InvalidAlphabet { position: 0, symbol: 0x7F })
    ));

    let table = build_table(b"!").unwrap();
    assert_eq!(table.find_in(b"~!").unwrap(), [1]);
    assert!(matches!(
        table.find_in(&[b'~', b'~' + 1]),
        Err(ShiftOrError::SymbolOutOfRange { position: 1, .. })
    ));
    assert!(matches!(
        table.find_in(&[b'!' - 1, b'!']),
        Err(ShiftOrError::SymbolOutOfRange { position: 0, .. })
    ));
}

#[test]
fn custom_symbol_range() {
    let range = SymbolRange::try_from(b' '..=b'~').unwrap();
    let table = build_table_in(b"to be", range).unwrap();
    assert_eq!(table.find_in(b"to be or not to be").unwrap(), [0, 13]);
    assert!(matches!(SymbolRange::new(b'b', b'a'), Err(ShiftOrError::InvalidRange { .. })));
}

#[test]
fn trait_search() {
    assert_eq!(b"GATTACAGATTACA".find_all_exact("TACA").unwrap(), [3, 10]);
    assert_eq!(
        String::from("abcabc").find_all_exact_ranges("bc").unwrap(),
        [1..3, 4..6]
    );
}

#[derive(Default)]
struct Recorder {
    states:  Vec<String>,
    shifted: Vec<String>,
    matches: Vec<usize>,
}

impl ScanObserver for Recorder {
    fn on_init(&mut self, state: BitsView<'_>, matched: bool) {
        self.states.push(state.to_string());
        if matched {
            self.matches.push(0);
        }
    }

    fn on_shift(&mut self, position: usize, _: u8, shifted: BitsView<'_>) {
        assert_eq!(position, self.states.len() + 1);
        self.shifted.push(shifted.to_string());
    }

    fn on_step(&mut self, step: &ScanStep<'_>) {
        self.states.push(step.state.to_string());
        self.matches.extend(step.matched);
    }
}

#[test]
fn observer_sees_every_step() {
    let table = build_table(b"aa").unwrap();
    let mut recorder = Recorder::default();
    let matches = find_matches_observed(b"aaba", b"aa", &table, &mut recorder).unwrap();

    assert_eq!(matches, recorder.matches);
    // Bit 0 first. Window "aa" matches; "b" breaks both prefixes; "a" restarts one.
    assert_eq!(recorder.states, ["00", "11", "10"]);
    // The shift drops bit 0 and brings in a zero at the top before the mask.
    assert_eq!(recorder.shifted, ["00", "10"]);

    let quiet = find_matches_observed(b"aaba", b"aa", &table, &mut Quiet).unwrap();
    assert_eq!(quiet, matches);
}

#[test]
fn trace_output() {
    let table = build_table(b"ab").unwrap();
    let mut trace = TraceWriter::new(Vec::new());
    find_matches_observed(b"xab", b"ab", &table, &mut trace).unwrap();
    let out = String::from_utf8(trace.finish().unwrap()).unwrap();

    assert_eq!(
        out,
        "Initial state: 10\n\n\
         State after shift for text[2] = 'b': 00\n\
         Mask for text[2] = 'b': 01\n\
         State after text[2] = 'b': 01\n\
         Match found at position: 1\n\n"
    );
}

#[test]
fn positions_file_format() {
    let table = build_table(b"aaa").unwrap();
    let positions = table.find_in(b"aaaabaaacaaaaa").unwrap();
    let mut out = Vec::new();
    write_positions(&mut out, &positions).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n6\n10\n11\n12\n");
}
