use cheesepp::{
    ast::{BinaryOperator, Expr, Statement},
    error::{ParseError, RuntimeError},
    interpret,
    interpreter::{evaluator::core::Runtime, value::Value},
    parse,
};

fn run(source: &str) -> String {
    interpret(source).unwrap_or_else(|e| panic!("Script failed:\n{source}\nError: {e}"))
}

fn parse_failure(source: &str) -> ParseError {
    match parse(source) {
        Ok(_) => panic!("Script parsed but was expected to fail:\n{source}"),
        Err(e) => e,
    }
}

fn runtime_failure(source: &str) -> RuntimeError {
    let program = parse(source).unwrap_or_else(|e| panic!("Script failed to parse:\n{source}\nError: {e}"));
    let mut runtime = Runtime::with_output(Vec::new());
    match runtime.run(&program, source) {
        Ok(()) => panic!("Script ran but was expected to fail:\n{source}"),
        Err(e) => e,
    }
}

/// Extracts the operator tag of a program whose single statement assigns a
/// binary expression.
fn assigned_operator(source: &str) -> BinaryOperator {
    let program = parse(source).unwrap_or_else(|e| panic!("Script failed to parse:\n{source}\nError: {e}"));
    match program.statements.as_slice() {
        [Statement::Assign { value: Expr::Binary { op, .. },
                             .. }] => *op,
        other => panic!("Expected a single binary assignment, got {other:?}"),
    }
}

#[test]
fn hello_world_prints_exactly() {
    let source = "Cheese\n Wensleydale(SwissHello WorldSwiss) Brie\nNoCheese";
    assert_eq!(run(source), "Hello World\n");
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(run("Cheese NoCheese"), "");
}

#[test]
fn arithmetic_through_variables() {
    let source = "Cheese a = 5 Brie b = Glyn(a) plus 3 Brie Wensleydale(Glyn(b)) Brie NoCheese";
    assert_eq!(run(source), "8\n");
}

#[test]
fn whole_number_results_print_without_fraction() {
    assert_eq!(run("Cheese Wensleydale(4 times 2) Brie NoCheese"), "8\n");
    assert_eq!(run("Cheese Wensleydale(5 over 2) Brie NoCheese"), "2.5\n");
}

#[test]
fn products_bind_tighter_than_sums() {
    assert_eq!(run("Cheese Wensleydale(10 minus 2 times 3) Brie NoCheese"), "4\n");
    assert_eq!(run("Cheese Wensleydale((1 plus 2) times 3) Brie NoCheese"), "9\n");
}

#[test]
fn conditional_picks_then_branch() {
    let source = "Cheese x = 10 Brie Halloumi Glyn(x) greater 5 \
                  Wensleydale(SwissASwiss) Brie White Wensleydale(SwissBSwiss) Brie \
                  Gorgonzola NoCheese";
    assert_eq!(run(source), "A\n");
}

#[test]
fn conditional_picks_else_branch() {
    let source = "Cheese x = 2 Brie Halloumi Glyn(x) greater 5 \
                  Wensleydale(SwissASwiss) Brie White Wensleydale(SwissBSwiss) Brie \
                  Gorgonzola NoCheese";
    assert_eq!(run(source), "B\n");
}

#[test]
fn conditional_without_else_is_a_noop_when_false() {
    let source = "Cheese Halloumi 1 equals 2 Wensleydale(1) Brie Gorgonzola NoCheese";
    assert_eq!(run(source), "");
}

#[test]
fn loop_counts_to_five() {
    let source = "Cheese\ni = 0 Brie\nEmmental\n Wensleydale(Glyn(i)) Brie\n \
                  i = Glyn(i) plus 1 Brie\nRicotta Glyn(i) equals 5\nGorgonzola\nNoCheese";
    assert_eq!(run(source), "0\n1\n2\n3\n4\n");
}

#[test]
fn loop_body_runs_at_least_once() {
    // Repeat-until: the condition is true before the first pass, but the
    // body still executes exactly once.
    let source = "Cheese x = 10 Brie Emmental Wensleydale(Glyn(x)) Brie \
                  Ricotta Glyn(x) greater 5 Gorgonzola NoCheese";
    assert_eq!(run(source), "10\n");
}

#[test]
fn loops_and_conditionals_nest() {
    let source = "Cheese\ni = 0 Brie\nEmmental\n Halloumi Glyn(i) minor 3\n  \
                  Wensleydale(SwisssmallSwiss) Brie\n White\n  \
                  Wensleydale(SwissbigSwiss) Brie\n Gorgonzola\n \
                  i = Glyn(i) plus 1 Brie\nRicotta Glyn(i) equals 5\nGorgonzola\nNoCheese";
    assert_eq!(run(source), "small\nsmall\nsmall\nbig\nbig\n");
}

#[test]
fn parsing_is_deterministic() {
    let source = "Cheese\ni = 0 Brie\nEmmental\n Wensleydale(Glyn(i)) Brie\n \
                  i = Glyn(i) plus 1 Brie\nRicotta Glyn(i) atleast 3\nGorgonzola\nNoCheese";
    assert_eq!(parse(source).unwrap(), parse(source).unwrap());
}

#[test]
fn operator_aliases_share_one_tag() {
    let pairs = [("+", "plus", BinaryOperator::Add),
                 ("-", "minus", BinaryOperator::Sub),
                 ("*", "times", BinaryOperator::Mul),
                 ("/", "over", BinaryOperator::Div),
                 ("==", "equals", BinaryOperator::Equal),
                 ("!=", "differs", BinaryOperator::NotEqual),
                 ("<", "minor", BinaryOperator::Less),
                 (">", "greater", BinaryOperator::Greater),
                 ("<=", "atmost", BinaryOperator::LessEqual),
                 (">=", "atleast", BinaryOperator::GreaterEqual)];

    for (symbol, word, expected) in pairs {
        let symbolic = format!("Cheese x = 1 {symbol} 2 Brie NoCheese");
        let worded = format!("Cheese x = 1 {word} 2 Brie NoCheese");
        assert_eq!(assigned_operator(&symbolic), expected, "{symbol} has the wrong tag");
        assert_eq!(assigned_operator(&worded), expected, "{word} has the wrong tag");
    }
}

#[test]
fn operator_aliases_evaluate_identically() {
    let pairs = [("+", "plus"), ("-", "minus"), ("*", "times"), ("/", "over")];

    for (symbol, word) in pairs {
        let symbolic = run(&format!("Cheese Wensleydale(9 {symbol} 4) Brie NoCheese"));
        let worded = run(&format!("Cheese Wensleydale(9 {word} 4) Brie NoCheese"));
        assert_eq!(symbolic, worded, "{symbol} and {word} disagree");
    }

    let symbolic = run("Cheese Halloumi 1 < 2 Wensleydale(1) Brie Gorgonzola NoCheese");
    let worded = run("Cheese Halloumi 1 minor 2 Wensleydale(1) Brie Gorgonzola NoCheese");
    assert_eq!(symbolic, worded);
}

#[test]
fn declaration_styles_bind_identically() {
    let sources = ["Cheese x = 3 plus 4 Brie NoCheese",
                   "Cheese Cheddar(x, 3 plus 4) Brie NoCheese",
                   "Cheese Cheddar x Coleraine 3 plus 4 Brie NoCheese"];

    for source in sources {
        let program = parse(source).unwrap();
        let mut runtime = Runtime::with_output(Vec::new());
        runtime.run(&program, source).unwrap();
        assert_eq!(runtime.variable("x"), Some(&Value::Number(7.0)), "in {source}");
    }
}

#[test]
fn rebinding_a_name_is_permitted() {
    let source = "Cheese x = 1 Brie x = Glyn(x) plus 1 Brie Wensleydale(Glyn(x)) Brie NoCheese";
    assert_eq!(run(source), "2\n");
}

#[test]
fn accented_strings_round_trip() {
    let source = "Cheese Wensleydale(SwissÉmmental à pâtéSwiss) Brie NoCheese";
    assert_eq!(run(source), "Émmental à pâté\n");
}

#[test]
fn string_escapes_decode_at_lowering() {
    let source = "Cheese Wensleydale(Swissline1\\nline2Swiss) Brie NoCheese";
    assert_eq!(run(source), "line1\nline2\n");
}

#[test]
fn debug_dump_echoes_the_source_verbatim() {
    let source = "  Cheese\nBelgian Brie\nNoCheese\n";
    assert_eq!(run(source), source);
}

#[test]
fn debug_dump_interleaves_with_prints() {
    let source = "Cheese Wensleydale(1) Brie Belgian Brie Wensleydale(2) Brie NoCheese";
    assert_eq!(run(source), format!("1\n{source}2\n"));
}

#[test]
fn unknown_variable_is_an_error_not_a_default() {
    let source = "Cheese Wensleydale(Glyn(nope)) Brie NoCheese";
    let error = runtime_failure(source);
    assert!(matches!(error, RuntimeError::UnknownVariable { ref name, .. } if name == "nope"),
            "got {error:?}");
}

#[test]
fn arithmetic_on_strings_is_a_type_error() {
    let error = runtime_failure("Cheese x = SwissaSwiss plus 1 Brie NoCheese");
    assert!(matches!(error, RuntimeError::TypeMismatch { .. }), "got {error:?}");
}

#[test]
fn division_by_zero_is_an_error() {
    let error = runtime_failure("Cheese x = 1 over 0 Brie NoCheese");
    assert!(matches!(error, RuntimeError::DivisionByZero { .. }), "got {error:?}");
}

#[test]
fn comparisons_are_not_storable_values() {
    let error = runtime_failure("Cheese x = 1 equals 2 Brie NoCheese");
    assert!(matches!(error, RuntimeError::TypeMismatch { .. }), "got {error:?}");
}

#[test]
fn conditions_must_be_comparisons() {
    let error = runtime_failure("Cheese Halloumi 1 Wensleydale(1) Brie Gorgonzola NoCheese");
    assert!(matches!(error, RuntimeError::MalformedCondition { .. }), "got {error:?}");
}

#[test]
fn comparing_strings_is_a_type_error() {
    let source = "Cheese Halloumi SwissaSwiss equals 1 Wensleydale(1) Brie Gorgonzola NoCheese";
    let error = runtime_failure(source);
    assert!(matches!(error, RuntimeError::TypeMismatch { .. }), "got {error:?}");
}

#[test]
fn program_must_open_with_cheese() {
    let error = parse_failure("x = 1 Brie NoCheese");
    assert!(matches!(error, ParseError::MissingProgramStart { .. }), "got {error:?}");
}

#[test]
fn program_must_close_with_nocheese() {
    let error = parse_failure("Cheese x = 1 Brie");
    assert!(matches!(error, ParseError::MissingProgramEnd { .. }), "got {error:?}");
}

#[test]
fn statements_require_their_brie() {
    let error = parse_failure("Cheese x = 1 NoCheese");
    assert!(matches!(error, ParseError::MissingStatementEnd { .. }), "got {error:?}");
}

#[test]
fn nothing_may_follow_nocheese() {
    let error = parse_failure("Cheese NoCheese Brie");
    assert!(matches!(error, ParseError::TrailingTokens { .. }), "got {error:?}");
}

#[test]
fn unrecognized_characters_are_lexical_errors() {
    let error = parse_failure("Cheese ? NoCheese");
    assert!(matches!(error, ParseError::UnrecognizedCharacter { .. }), "got {error:?}");
}

#[test]
fn unterminated_strings_are_lexical_errors() {
    let error = parse_failure("Cheese Wensleydale(SwissoopsSwis) Brie NoCheese");
    assert!(matches!(error, ParseError::UnterminatedString { .. }), "got {error:?}");
}

#[test]
fn syntax_errors_carry_their_position() {
    // The stray ')' sits on line 2, column 8.
    let error = parse_failure("Cheese\n x = 1 ) Brie\nNoCheese");
    let position = error.position();
    assert_eq!((position.line, position.column), (2, 8), "got {error}");
}

#[test]
fn bare_identifiers_are_not_expressions() {
    // Variable reads must go through the Glyn marker.
    let error = parse_failure("Cheese x = 1 Brie y = x Brie NoCheese");
    assert!(matches!(error, ParseError::UnexpectedToken { .. }), "got {error:?}");
}
