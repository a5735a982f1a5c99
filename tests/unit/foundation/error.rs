use super::*;

#[test]
fn helper_constructors_pick_the_right_variant() {
    assert!(matches!(
        ReelgridError::invalid_argument("x"),
        ReelgridError::InvalidArgument(_)
    ));
    assert!(matches!(
        ReelgridError::precondition("x"),
        ReelgridError::PreconditionFailed(_)
    ));
    assert!(matches!(
        ReelgridError::not_ready("x"),
        ReelgridError::NotReady(_)
    ));
}

#[test]
fn display_prefixes_are_stable() {
    assert_eq!(
        ReelgridError::invalid_argument("unknown anchor 'mid'").to_string(),
        "invalid argument: unknown anchor 'mid'"
    );
    assert_eq!(
        ReelgridError::precondition("screen must have at least one film").to_string(),
        "precondition failed: screen must have at least one film"
    );
    assert_eq!(
        ReelgridError::not_ready("compose() first").to_string(),
        "not ready: compose() first"
    );
}

#[test]
fn anyhow_errors_pass_through_transparently() {
    let err: ReelgridError = anyhow::anyhow!("backend exploded").into();
    assert_eq!(err.to_string(), "backend exploded");
}
