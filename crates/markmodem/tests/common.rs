/// Full transcript of a short debug session, as a host would see it with
/// no chunking at all.
pub const ORIGINAL: &str = "dgawk> run\n\
Starting program:\n\
Breakpoint 1, main() at `wordcount.awk':5\n\
5       { lines++ }\n\
dgawk> n\n\
7       { words += NF }\n\
dgawk> print words\n\
11\n\
dgawk> continue\n\
Breakpoint 2, report() at `summary.awk':23\n\
23      printf \"%d %d\\n\", lines, words\n\
dgawk> s\n\
24      total = lines + words\n\
dgawk> quit\n\
Program exited.\n\
dgawk> ";

// The same transcript cut into delivery-sized chunks on hostile seams.
// Breakpoint announcements are split mid-introducer, mid-file-name and
// mid-line-number; step markers arrive intact (a step echo split across
// deliveries is deliberately plain text).
#[rustfmt::skip]
pub const STREAM: [&str; 10] = [
    "dgawk> run\nStarting program:\nBreakp",          // introducer split mid-word
    "oint 1, main() at `wordc",                        // file name split
    "ount.awk':",                                      // line number not yet arrived
    "5\n5       { lines++ }\n",                        // number lands, echoed source line follows
    "dgawk> n\n7       { words += NF }\n",             // step marker, one delivery
    "dgawk> print words\n11\ndgawk> continue\nBreakpoint 2, report() at `summary.awk':2", // number split
    "3\n23      printf \"%d %d\\n\", lines, words\n",  // rest of the number
    "dgawk> s\n24      total = lines + words\n",       // bare-letter step
    "dgawk> quit\nProgram exited.\n",
    "dgawk> ",                                         // trailing prompt, no newline
];

#[test]
fn stream_concatenates_to_original() {
    assert_eq!(STREAM.concat(), ORIGINAL);
}
