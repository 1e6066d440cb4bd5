use std::fmt::Write;

use quickcheck::QuickCheck;

use crate::{LocationMarker, MarkerScanner};

/// Feed `text` to `scanner` in chunk sizes derived from `splits`,
/// collecting all display output and all frames.
fn feed_in_chunks(text: &str, splits: &[usize]) -> (String, Vec<LocationMarker>) {
    let chars: Vec<char> = text.chars().collect();
    let mut scanner = MarkerScanner::new();
    let mut out = String::new();
    let mut frames = Vec::new();

    let mut idx = 0;
    let mut remaining = chars.len();
    for s in splits {
        if remaining == 0 {
            break;
        }
        let size = 1 + (s % remaining);
        let chunk: String = chars[idx..idx + size].iter().collect();
        out.push_str(&scanner.feed(&chunk));
        frames.append(&mut scanner.take_frames());
        idx += size;
        remaining -= size;
    }
    if remaining > 0 {
        let chunk: String = chars[idx..].iter().collect();
        out.push_str(&scanner.feed(&chunk));
        frames.append(&mut scanner.take_frames());
    }
    out.push_str(&scanner.finish());
    (out, frames)
}

/// Property: no chunking of any input loses or duplicates display text.
/// The concatenated outputs plus the final flush equal the input exactly.
#[test]
fn partition_no_data_loss() {
    fn prop(text: String, splits: Vec<usize>) -> bool {
        let (out, _) = feed_in_chunks(&text, &splits);
        out == text
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(String, Vec<usize>) -> bool);
}

/// Property: a transcript whose markers are all explicit reports the same
/// frame sequence and the same display text under any chunking as under
/// one-shot feeding.
#[test]
fn partition_explicit_frames_invariant() {
    fn prop(stops: Vec<(u8, u16)>, splits: Vec<usize>) -> bool {
        let mut text = String::from("gawk> run\n");
        for (i, (fileno, line)) in stops.iter().enumerate() {
            writeln!(
                text,
                "Breakpoint {i}, walker() at `prog{fileno}.awk':{line}\nsome output line",
            )
            .unwrap();
        }

        let mut whole = MarkerScanner::new();
        let mut expected_out = whole.feed(&text);
        let expected_frames = whole.take_frames();
        expected_out.push_str(&whole.finish());

        let (out, frames) = feed_in_chunks(&text, &splits);
        out == expected_out && frames == expected_frames
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };
    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Vec<(u8, u16)>, Vec<usize>) -> bool);
}
