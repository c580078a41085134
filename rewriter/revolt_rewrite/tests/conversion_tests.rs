//! Fixture-driven conversion tests: each case pairs a source snippet with
//! the exact text the rewriter must produce.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use revolt_rewrite::rewrite;

struct Fixture {
    source: &'static str,
    expected: &'static str,
}

impl Fixture {
    const fn new(source: &'static str, expected: &'static str) -> Self {
        Fixture { source, expected }
    }
}

fn check(fixtures: &[Fixture]) {
    for fixture in fixtures {
        let outcome = rewrite(fixture.source).expect("rewrite failed");
        assert_eq!(outcome.text, fixture.expected, "source: {:?}", fixture.source);
    }
}

#[test]
fn boolean_assertions() {
    check(&[
        Fixture::new("assert(x)", "expect(x)"),
        Fixture::new("assertTrue(x)", "expect(x)"),
        Fixture::new("assertFalse(x)", "expect(!x)"),
        Fixture::new("assertTrue(a && b)", "expect(a && b)"),
    ]);
}

#[test]
fn comparison_assertions() {
    check(&[
        Fixture::new("assertEqual(a, b)", "expect(a == b)"),
        Fixture::new("assertNotEqual(a, b)", "expect(a != b)"),
        Fixture::new("assertIdentical(a, b)", "expect(a === b)"),
        Fixture::new("assertNotIdentical(a, b)", "expect(a !== b)"),
        Fixture::new("assertGreaterThan(a, b)", "expect(a > b)"),
        Fixture::new("assertGreaterThanOrEqual(a, b)", "expect(a >= b)"),
        Fixture::new("assertLessThan(a, b)", "expect(a < b)"),
        Fixture::new("assertLessThanOrEqual(a, b)", "expect(a <= b)"),
        // Operand spacing is normalized to one space around the operator.
        Fixture::new("assertEqual(a ,  b)", "expect(a == b)"),
        Fixture::new("assertEqual(f(x), g(y))", "expect(f(x) == g(y))"),
    ]);
}

#[test]
fn nil_assertions() {
    check(&[
        Fixture::new("assertNil(x)", "expect(x == nil)"),
        Fixture::new("assertNotNil(x)", "expect(x != nil)"),
        Fixture::new("assertNil(user.deletedAt)", "expect(user.deletedAt == nil)"),
    ]);
}

#[test]
fn unwrap_assertion() {
    check(&[Fixture::new("unwrap(maybe)", "require(maybe)")]);
}

#[test]
fn error_assertions() {
    check(&[
        Fixture::new(
            "assertThrowsError(try foo())",
            "expect(throws: (any Error).self) { try foo() }",
        ),
        Fixture::new(
            "assertNoThrow(try foo())",
            "expect(throws: Never.self) { try foo() }",
        ),
        // A legacy error-handler closure has no target equivalent and is
        // dropped along with extra arguments.
        Fixture::new(
            "assertThrowsError(try f()) { error in inspect(error) }",
            "expect(throws: (any Error).self) { try f() }",
        ),
    ]);
}

#[test]
fn failure_record() {
    check(&[
        Fixture::new("fail(\"boom\")", "Issue.record(\"boom\")"),
        Fixture::new("fail(message)", "Issue.record(message)"),
    ]);
}

#[test]
fn extra_arguments_are_dropped() {
    check(&[
        Fixture::new("assertTrue(x, \"custom message\")", "expect(x)"),
        Fixture::new("assertNil(x, \"should be gone\")", "expect(x == nil)"),
        Fixture::new("fail(\"boom\", 42)", "Issue.record(\"boom\")"),
    ]);
    let outcome = rewrite("assertTrue(x, \"m\")").unwrap();
    assert_eq!(outcome.lossy, 1);
}

#[test]
fn shape_mismatches_leave_the_call_untouched() {
    check(&[
        // Negation takes exactly one argument.
        Fixture::new("assertFalse(x, \"msg\")", "assertFalse(x, \"msg\")"),
        // Infix synthesis takes exactly two.
        Fixture::new("assertEqual(a)", "assertEqual(a)"),
        Fixture::new("assertEqual(a, b, \"msg\")", "assertEqual(a, b, \"msg\")"),
        // Single-argument shapes need at least one.
        Fixture::new("assertTrue()", "assertTrue()"),
        Fixture::new("fail()", "fail()"),
    ]);
}

#[test]
fn unknown_calls_are_untouched() {
    check(&[
        Fixture::new("print(\"hello\")", "print(\"hello\")"),
        Fixture::new("expectation(description: \"d\")", "expectation(description: \"d\")"),
    ]);
    let outcome = rewrite("print(\"hello\")").unwrap();
    assert!(!outcome.changed());
}

#[test]
fn member_chain_calls_are_never_rewritten() {
    check(&[
        Fixture::new("self.assertTrue(x)", "self.assertTrue(x)"),
        Fixture::new("helper.assertEqual(a, b)", "helper.assertEqual(a, b)"),
    ]);
}

#[test]
fn trivia_is_preserved_around_rewrites() {
    check(&[
        Fixture::new(
            "    assertTrue(x) // keep me\n",
            "    expect(x) // keep me\n",
        ),
        Fixture::new(
            "func testUser() {\n    // setup\n    assertEqual(user.name, \"ada\")\n}\n",
            "func testUser() {\n    // setup\n    expect(user.name == \"ada\")\n}\n",
        ),
        Fixture::new(
            "assertTrue(x)\nassertFalse(y)\n",
            "expect(x)\nexpect(!y)\n",
        ),
    ]);
}

#[test]
fn imports_are_migrated() {
    check(&[
        Fixture::new("import XCTest\n", "import Testing\n"),
        Fixture::new("import Foundation\n", "import Foundation\n"),
    ]);
    let outcome = rewrite("import XCTest\nassertTrue(x)\n").unwrap();
    assert_eq!(outcome.text, "import Testing\nexpect(x)\n");
    assert_eq!(outcome.imports_rewritten, 1);
    assert_eq!(outcome.converted, 1);
}

#[test]
fn whole_file_conversion() {
    let source = r#"import XCTest

final class UserTests: XCTestCase {
    func testRoundTrip() {
        let user = User(name: "ada")
        assertEqual(user.name, "ada")
        assertNotNil(user.id)
        assertThrowsError(try user.promote())
    }

    func testTodo() {
        fail("not implemented")
    }
}
"#;
    let expected = r#"import Testing

final class UserTests: XCTestCase {
    func testRoundTrip() {
        let user = User(name: "ada")
        expect(user.name == "ada")
        expect(user.id != nil)
        expect(throws: (any Error).self) { try user.promote() }
    }

    func testTodo() {
        Issue.record("not implemented")
    }
}
"#;
    let outcome = rewrite(source).unwrap();
    assert_eq!(outcome.text, expected);
    assert_eq!(outcome.converted, 4);
    assert_eq!(outcome.imports_rewritten, 1);
}

#[test]
fn rewriting_is_stable() {
    // Output of a rewrite contains no legacy names, so a second pass is a
    // no-op.
    let sources = [
        "assertTrue(x)",
        "assertEqual(a, b)",
        "fail(\"boom\")",
        "import XCTest\nassertNil(x)\n",
    ];
    for source in sources {
        let once = rewrite(source).unwrap().text;
        let twice = rewrite(&once).unwrap().text;
        assert_eq!(twice, once, "source: {source:?}");
    }
}

proptest! {
    // No legacy name can appear in this alphabet, so the rewrite must be
    // the identity, byte for byte.
    #[test]
    fn non_matching_text_is_identity(source in "[m-z0-9 \t\n.,:;+=<>!&|?-]{0,80}") {
        let outcome = rewrite(&source).unwrap();
        prop_assert!(!outcome.changed());
        prop_assert_eq!(outcome.text, source);
    }

    // Unknown callee names round-trip even as parsed call expressions.
    #[test]
    fn unknown_calls_are_identity(
        name in "[m-z][m-z0-9]{0,8}",
        arg in "[m-z0-9 ]{0,12}",
    ) {
        let source = format!("{name}({arg})");
        let outcome = rewrite(&source).unwrap();
        prop_assert!(!outcome.changed());
        prop_assert_eq!(outcome.text, source);
    }
}
