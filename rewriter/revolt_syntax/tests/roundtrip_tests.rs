//! Round-trip verification: parse then print must reproduce the input
//! byte-for-byte for any input that parses.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use revolt_syntax::{parse, print_tree};

fn round_trips(source: &str) {
    let tree = parse(source).expect("input should parse");
    assert_eq!(print_tree(&tree), source);
}

#[test]
fn realistic_test_file_round_trips() {
    round_trips(
        r#"import XCTest

final class UserTests: XCTestCase {
    // the main path
    func testName() {
        let user = User(name: "ada")
        assertEqual(user.name, "ada")   /* inline */
        assertTrue(user.isValid)
        assertNil(user.deletedAt)
    }

    func testFailure() {
        fail("not implemented")
    }
}
"#,
    );
}

#[test]
fn strings_and_comments_round_trip() {
    round_trips("let s = \"a (b, c) { d }\" // comment with ) brace }\n");
    round_trips("/* nested /* comments */ work */ let x = 1");
    round_trips("let t = \"interp \\(value) and \\(f(x, y))\"");
    round_trips("let m = \"\"\"\n  multi \"line\"\n  \"\"\"");
}

#[test]
fn trailing_closures_and_members_round_trip() {
    round_trips("items.map { $0.count }.filter { $0 > 2 }");
    round_trips("run(after: 2) { done() }");
    round_trips("if check(x) {\n    act()\n}");
}

#[test]
fn crlf_and_tabs_round_trip() {
    round_trips("\tfoo(a)\r\n\tbar(b)\r\n");
}

proptest! {
    // Token soup without delimiters or string/comment starts: everything
    // lands in verbatim runs and must survive unchanged.
    #[test]
    fn flat_token_soup_round_trips(source in "[a-z0-9 \t\n.,:;+=<>!&|?-]{0,80}") {
        round_trips(&source);
    }

    // The same soup wrapped in balanced delimiters.
    #[test]
    fn wrapped_token_soup_round_trips(
        inner in "[a-z0-9 \t\n.:;+=<>!&|?-]{0,40}",
        which in 0usize..3,
    ) {
        let (open, close) = [("(", ")"), ("{", "}"), ("[", "]")][which];
        let source = format!("head {open}{inner}{close} tail");
        round_trips(&source);
    }

    // Identifier-paren sequences parse as calls and must still round-trip.
    #[test]
    fn call_shapes_round_trip(
        name in "[a-z][a-z0-9]{0,8}",
        arg in "[a-z0-9 ]{0,12}",
        pad in "[ \t]{0,4}",
    ) {
        let source = format!("{pad}{name}({arg})\n");
        round_trips(&source);
    }
}
