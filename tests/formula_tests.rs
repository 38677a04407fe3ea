// Integration tests for parsing and evaluating formulas

use curvetty::parser::lexer::{Lexer, Token};
use curvetty::sampling::SampleSet;
use curvetty::Formula;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

fn eval(source: &str, x: f64) -> f64 {
    let mut formula = Formula::new();
    assert!(formula.parse(source), "'{}' failed: {:?}", source, formula.last_error());
    formula.evaluate(x)
}

#[test]
fn test_number_literals_keep_their_value() {
    for int_part in [0u64, 1, 7, 42, 1234, 98765] {
        for frac in ["", "5", "25", "125", "0001", "999999"] {
            let text = if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac)
            };
            let expected: f64 = text.parse().unwrap();

            let mut lexer = Lexer::new(&text);
            match lexer.next_token().unwrap() {
                Token::Number(n) => assert!(approx(n, expected), "{} lexed as {}", text, n),
                other => panic!("Expected number for {}, got {}", text, other),
            }
        }
    }
}

#[test]
fn test_constant_expression() {
    let mut formula = Formula::new();
    assert!(formula.parse("2+3"));
    for x in [0.0, -1.0, 1e6] {
        assert_eq!(formula.evaluate(x), 5.0);
    }
}

#[test]
fn test_basic_forms() {
    assert_eq!(eval("x^2", 3.0), 9.0);
    assert_eq!(eval("x^2", -2.0), 4.0);
    assert_eq!(eval("3x", 5.0), 15.0);
    assert_eq!(eval("2(x+1)", 4.0), 10.0);
    assert_eq!(eval("-x", 5.0), -5.0);
    assert_eq!(eval("--x", 5.0), 5.0);
    assert!(approx(eval("sin(x)", 0.0), 0.0));
}

#[test]
fn test_whitespace_and_case() {
    assert_eq!(eval("  2 *\tX + 1 ", 3.0), 7.0);
    assert_eq!(eval("3X", 2.0), 6.0);
}

#[test]
fn test_precedence() {
    assert_eq!(eval("1 + 2 * 3", 0.0), 7.0);
    assert_eq!(eval("2 * 3 ^ 2", 0.0), 18.0);
    assert_eq!(eval("(1 + 2) * 3", 0.0), 9.0);
    assert_eq!(eval("10 - 2 - 3", 0.0), 5.0);
    assert_eq!(eval("64 / 4 / 2", 0.0), 8.0);
    assert_eq!(eval("-x^2", 3.0), 9.0);
    assert_eq!(eval("2^-1", 0.0), 0.5);
    assert_eq!(eval("(2^3)^2", 0.0), 64.0);
}

#[test]
fn test_all_functions() {
    let x: f64 = 0.5;
    let cases: [(&str, f64); 16] = [
        ("cos(x)", x.cos()),
        ("sin(x)", x.sin()),
        ("tg(x)", x.tan()),
        ("tan(x)", x.tan()),
        ("ctg(x)", 1.0 / x.tan()),
        ("cot(x)", 1.0 / x.tan()),
        ("arcsin(x)", x.asin()),
        ("asin(x)", x.asin()),
        ("arccos(x)", x.acos()),
        ("acos(x)", x.acos()),
        ("arctg(x)", x.atan()),
        ("atan(x)", x.atan()),
        ("ln(x)", x.ln()),
        ("log(x)", x.ln()),
        ("lg(x)", x.log10()),
        ("abs(-x)", x),
    ];

    for (source, expected) in cases {
        assert!(approx(eval(source, x), expected), "{} != {}", source, expected);
    }
}

#[test]
fn test_nested_expression() {
    // Implicit multiplication binds tighter than '^': 2(x + 1)^2 is (2(x + 1))^2
    let f = |x: f64| (2.0 * (x + 1.0)).powf(2.0) - (3.0 * x).sin() / (x.abs() + 1.0);
    for x in [-2.0, -0.5, 0.0, 1.5, 3.0] {
        assert!(approx(eval("2(x + 1)^2 - sin(3x) / (abs(x) + 1)", x), f(x)));
    }
}

#[test]
fn test_rejected_inputs() {
    let rejected = [
        "2*(3",   // unbalanced parenthesis
        "2.",     // missing fraction
        "foo(x)", // unknown function
        "",       // nothing to parse
        "   ",
        "2^3^2", // power does not chain
        "x y",
        "sin x",
        "2 $ 3",
        "(x))",
        "1 +",
        "Sin(x)", // names are case-sensitive
    ];

    for source in rejected {
        let mut formula = Formula::new();
        assert!(!formula.parse(source), "'{}' should be rejected", source);
        assert!(formula.last_error().is_some());
        assert_eq!(formula.evaluate(1.0), 0.0);
    }
}

#[test]
fn test_error_kinds() {
    let lexical = ["2.", "foo(x)", "2 $ 3"];
    for source in lexical {
        let err = Formula::compile(source).unwrap_err();
        assert!(err.is_lexical(), "{}: {}", source, err);
    }

    let syntax = ["2*(3", "2^3^2", "", "sin x"];
    for source in syntax {
        let err = Formula::compile(source).unwrap_err();
        assert!(err.is_syntax(), "{}: {}", source, err);
    }
}

#[test]
fn test_division_by_zero_is_infinite() {
    let mut formula = Formula::new();
    assert!(formula.parse("1/0"));
    for x in [0.0, 2.0, -7.5] {
        assert_eq!(formula.evaluate(x), f64::INFINITY);
    }
}

#[test]
fn test_evaluate_is_idempotent() {
    let formula = Formula::compile("sin(x) * x^2 - 3x").unwrap();
    let program_before = formula.program().clone();
    let first = formula.evaluate(1.234);
    let second = formula.evaluate(1.234);
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(formula.program(), &program_before);
}

#[test]
fn test_reparse_replaces_program() {
    let mut formula = Formula::new();
    assert!(formula.parse("x + 100"));
    assert_eq!(formula.evaluate(1.0), 101.0);

    assert!(formula.parse("2x"));
    assert_eq!(formula.evaluate(1.0), 2.0);
    assert_eq!(formula.program().to_string(), "2 x *");

    assert!(!formula.parse("2x +"));
    assert_eq!(formula.evaluate(1.0), 0.0);

    assert!(formula.parse("x"));
    assert_eq!(formula.evaluate(1.0), 1.0);
    assert!(formula.last_error().is_none());
}

#[test]
fn test_concurrent_evaluation() {
    let formula = Formula::compile("x^2 - 2x + 1").unwrap();
    let expected: Vec<f64> = (0..100).map(|i| formula.evaluate(i as f64)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| (0..100).map(|i| formula.evaluate(i as f64)).collect::<Vec<f64>>()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_deep_nesting_fails_cleanly() {
    let source = format!("{}x{}", "(".repeat(300), ")".repeat(300));
    let mut formula = Formula::new();
    assert!(!formula.parse(&source));

    let source = format!("{}x{}", "sin(".repeat(50), ")".repeat(50));
    assert!(formula.parse(&source));
}

#[test]
fn test_sampling_a_formula() {
    let formula = Formula::compile("abs(x - 1)").unwrap();
    let set = SampleSet::sample(&formula, -1.0, 3.0, 5);
    let ys: Vec<f64> = set.points().iter().map(|s| s.y).collect();
    assert_eq!(ys, vec![2.0, 1.0, 0.0, 1.0, 2.0]);
    assert_eq!(set.y_bounds(), Some((0.0, 2.0)));
}
