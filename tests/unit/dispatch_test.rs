//! Unit tests for tag-based workout construction.

use fittrack::workouts::{build_workout, Workout, WorkoutError, WorkoutKind};

#[test]
fn test_known_tags() {
    let swim = build_workout("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let run = build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();
    let walk = build_workout("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();

    assert!(matches!(swim, Workout::Swimming(_)));
    assert!(matches!(run, Workout::Running(_)));
    assert!(matches!(walk, Workout::RaceWalking(_)));
}

#[test]
fn test_unknown_tag_is_an_error() {
    let result = build_workout("XYZ", &[15000.0, 1.0, 75.0]);

    match result {
        Err(WorkoutError::UnknownType(tag)) => assert_eq!(tag, "XYZ"),
        other => panic!("Expected UnknownType, got {:?}", other),
    }
}

#[test]
fn test_tags_are_case_sensitive() {
    for tag in ["run", "Run", "swm", "wlk ", ""] {
        assert!(
            matches!(build_workout(tag, &[1.0, 1.0, 1.0]), Err(WorkoutError::UnknownType(_))),
            "tag {:?} should be rejected",
            tag
        );
    }
}

#[test]
fn test_arity_mismatch() {
    let result = build_workout("WLK", &[9000.0, 1.0, 75.0]);

    assert_eq!(
        result,
        Err(WorkoutError::ArityMismatch {
            kind: WorkoutKind::RaceWalking,
            expected: 4,
            actual: 3,
        })
    );
}

#[test]
fn test_extra_readings_rejected() {
    let result = build_workout("RUN", &[15000.0, 1.0, 75.0, 180.0]);
    assert!(matches!(result, Err(WorkoutError::ArityMismatch { expected: 3, actual: 4, .. })));
}

#[test]
fn test_dispatch_is_deterministic() {
    let readings = [720.0, 1.0, 80.0, 25.0, 40.0];
    let first = build_workout("SWM", &readings).unwrap().summary();
    let second = build_workout("SWM", &readings).unwrap().summary();

    assert_eq!(first, second);
    assert_eq!(first.calories().to_bits(), second.calories().to_bits());
    assert_eq!(first.render(), second.render());
}

#[test]
fn test_workout_forwards_to_variant() {
    let workout = build_workout("RUN", &[15000.0, 1.0, 75.0]).unwrap();

    assert_eq!(workout.kind(), WorkoutKind::Running);
    assert_eq!(workout.session().action_count, 15000);
    assert!((workout.distance() - 9.75).abs() < 1e-9);
    assert!((workout.mean_speed() - 9.75).abs() < 1e-9);
    assert!((workout.spent_calories() - 699.75).abs() < 1e-9);
}
