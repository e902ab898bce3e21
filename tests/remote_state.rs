//! Tests for the RemoteState match combinators.

use workboard::data::RemoteState;

fn describe(state: &RemoteState<Vec<u32>>) -> String {
    state.fold(
        || "not asked".to_string(),
        || "loading".to_string(),
        |e| format!("failed: {}", e),
        |data| format!("{} items", data.len()),
    )
}

#[test]
fn test_fold_visits_each_variant() {
    assert_eq!(describe(&RemoteState::NotAsked), "not asked");
    assert_eq!(describe(&RemoteState::Loading), "loading");
    assert_eq!(
        describe(&RemoteState::Failure("timeout".to_string())),
        "failed: timeout"
    );
    assert_eq!(describe(&RemoteState::Success(vec![1, 2, 3])), "3 items");
}

#[test]
fn test_try_fold_propagates_handler_error() {
    let state: RemoteState<u32> = RemoteState::Success(0);

    let result: Result<u32, String> = state.try_fold(
        || Ok(0),
        || Ok(0),
        |_| Ok(0),
        |n| {
            if *n == 0 {
                Err("zero".to_string())
            } else {
                Ok(100 / n)
            }
        },
    );

    assert_eq!(result, Err("zero".to_string()));
}

#[test]
fn test_try_fold_success_path() {
    let state: RemoteState<u32> = RemoteState::Success(4);
    let result: Result<u32, String> = state.try_fold(|| Ok(0), || Ok(0), |_| Ok(0), |n| Ok(n * 2));
    assert_eq!(result, Ok(8));
}

#[test]
fn test_custom_error_type() {
    #[derive(Debug, PartialEq)]
    enum LoadError {
        Offline,
    }

    let state: RemoteState<u32, LoadError> = RemoteState::from_result(Err(LoadError::Offline));
    assert!(state.is_terminal());
    assert!(state.as_success().is_none());
    assert_eq!(state, RemoteState::Failure(LoadError::Offline));
}

#[test]
fn test_only_outcomes_are_terminal() {
    assert!(!RemoteState::<u32>::NotAsked.is_terminal());
    assert!(!RemoteState::<u32>::Loading.is_terminal());
    assert!(RemoteState::<u32>::Failure("x".to_string()).is_terminal());
    assert!(RemoteState::<u32>::Success(1).is_terminal());
}
