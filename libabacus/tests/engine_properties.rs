//! Behavioural properties of the calculator engine
//!
//! Drives the engine through the public token vocabulary, the same way
//! the front ends do.

use libabacus::{apply_intent, parse_tokens, CalculatorState, Digit, Intent, Operator, ERROR_TOKEN};

/// Run a whitespace-separated token script from a fresh state
fn run(script: &str) -> CalculatorState {
    run_from(CalculatorState::new(), script)
}

fn run_from(state: CalculatorState, script: &str) -> CalculatorState {
    parse_tokens(script)
        .unwrap()
        .into_iter()
        .fold(state, apply_intent)
}

/// States reachable from a handful of representative scripts
fn reachable_states() -> Vec<CalculatorState> {
    [
        "",
        "7",
        "1.2.3",
        "5 +",
        "5 + 3",
        "5 + 3 =",
        "8 / 0 =",
        "9 sqrt",
        "2 neg",
        "4 neg sqrt =",
        "12 back back",
        "8 / 0 = 5",
    ]
    .iter()
    .map(|script| run(script))
    .collect()
}

#[test]
fn test_digits_concatenate() {
    for digits in ["1", "42", "9081726354", "3.14159", "700"] {
        let state = run(digits);
        assert_eq!(state.display(), digits);
    }
}

#[test]
fn test_leading_zero_is_replaced_not_prefixed() {
    assert_eq!(run("0 5").display(), "5");
    assert_eq!(run("0 0 0").display(), "0");
}

#[test]
fn test_operator_then_equals_uses_zero() {
    assert_eq!(run("6 + =").display(), "6");
    assert_eq!(run("6 - =").display(), "6");
    assert_eq!(run("6 * =").display(), "0");
    assert_eq!(run("6 / =").display(), ERROR_TOKEN);
}

#[test]
fn test_clear_from_any_state() {
    for state in reachable_states() {
        let cleared = apply_intent(state, Intent::Clear);
        assert_eq!(cleared, CalculatorState::new());
        assert_eq!(cleared.display(), "0");
        assert_eq!(cleared.operand1(), 0.0);
        assert_eq!(cleared.operand2(), 0.0);
        assert_eq!(cleared.pending_operator(), None);
    }
}

#[test]
fn test_backspace_terminates_at_zero() {
    for state in reachable_states() {
        let mut state = state;
        for _ in 0..32 {
            state = apply_intent(state, Intent::Backspace);
        }
        assert_eq!(state.display(), "0");

        let again = apply_intent(state.clone(), Intent::Backspace);
        assert_eq!(again, state);
    }
}

#[test]
fn test_toggle_sign_is_an_involution() {
    for script in ["5", "12.75", "0.001", "3 * 4 =", "1 - 9 ="] {
        let original = run(script);
        let value: f64 = original.display().parse().unwrap();

        let twice = run_from(original, "neg neg");
        let back: f64 = twice.display().parse().unwrap();
        assert_eq!(back, value, "script {:?}", script);
    }
}

#[test]
fn test_division_by_zero_shows_error() {
    assert_eq!(run("8 / 0 =").display(), ERROR_TOKEN);
}

#[test]
fn test_square_root_of_nine() {
    assert_eq!(run("9 √ =").display(), "3");
}

#[test]
fn test_addition() {
    assert_eq!(run("5 + 3 =").display(), "8");
}

#[test]
fn test_error_display_recovers_with_digit() {
    let state = run("8 / 0 = 4 2");
    assert_eq!(state.display(), "42");
}

#[test]
fn test_chained_evaluation_reuses_result() {
    let state = run("2 * 3 = + 4 =");
    assert_eq!(state.display(), "10");
}

#[test]
fn test_intents_built_directly() {
    let state = [
        Intent::Digit(Digit::try_from('7').unwrap()),
        Intent::Operator(Operator::Multiply),
        Intent::Digit(Digit::try_from('6').unwrap()),
        Intent::Equals,
    ]
    .into_iter()
    .fold(CalculatorState::new(), apply_intent);

    assert_eq!(libabacus::current_display(&state), "42");
}
