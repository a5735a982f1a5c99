use super::*;

/// Minimal timed span for exercising placement in isolation.
#[derive(Clone, Copy, Debug)]
struct Span {
    begin: f64,
    len: f64,
}

impl Timed for Span {
    fn begin(&self) -> f64 {
        self.begin
    }

    fn finish(&self) -> f64 {
        self.begin + self.len
    }
}

fn insert(children: &mut Vec<Span>, parent_begin: f64, placement: Placement, start: f64, len: f64) {
    let begin = placed_begin(parent_begin, children, placement, start);
    children.push(Span { begin, len });
}

#[test]
fn placement_parse_accepts_the_three_policies() {
    assert_eq!(Placement::parse("compose").unwrap(), Placement::Compose);
    assert_eq!(Placement::parse(" Concat ").unwrap(), Placement::Concat);
    assert_eq!("LAST".parse::<Placement>().unwrap(), Placement::Last);
}

#[test]
fn unknown_placement_is_rejected_not_defaulted() {
    let err = Placement::parse("stack").unwrap_err();
    assert!(
        matches!(err, crate::foundation::error::ReelgridError::InvalidArgument(_)),
        "{err}"
    );
}

#[test]
fn compose_places_at_an_absolute_offset_from_the_parent() {
    let mut children = Vec::new();
    insert(&mut children, 10.0, Placement::Compose, 2.0, 5.0);
    insert(&mut children, 10.0, Placement::Compose, 0.5, 5.0);
    // Independent of siblings.
    assert_eq!(children[0].begin, 12.0);
    assert_eq!(children[1].begin, 10.5);
}

#[test]
fn concat_accumulates_lifetimes_and_gaps() {
    let mut children = Vec::new();
    let gaps = [0.5, 1.0, 0.25];
    let lens = [2.0, 3.0, 4.0];
    for (gap, len) in gaps.into_iter().zip(lens) {
        insert(&mut children, 0.0, Placement::Concat, gap, len);
    }
    // Child i begins at the sum of all previous lifetimes and all gaps so far.
    assert_eq!(children[0].begin, 0.5);
    assert_eq!(children[1].begin, 0.5 + 2.0 + 1.0);
    assert_eq!(children[2].begin, 0.5 + 2.0 + 1.0 + 3.0 + 0.25);
}

#[test]
fn last_staggers_starts_by_a_fixed_delta() {
    let mut children = Vec::new();
    for _ in 0..4 {
        insert(&mut children, 0.0, Placement::Last, 0.75, 10.0);
    }
    assert_eq!(children[0].begin, 0.75);
    for pair in children.windows(2) {
        assert_eq!(pair[1].begin - pair[0].begin, 0.75);
    }
}

#[test]
fn derived_finish_is_begin_without_children() {
    let none: Vec<Span> = Vec::new();
    assert_eq!(derived_finish(3.5, &none), 3.5);
}

#[test]
fn derived_finish_is_the_max_child_finish() {
    let children = vec![
        Span {
            begin: 0.0,
            len: 2.0,
        },
        Span {
            begin: 1.0,
            len: 5.0,
        },
        Span {
            begin: 4.0,
            len: 0.5,
        },
    ];
    assert_eq!(derived_finish(0.0, &children), 6.0);
    // Recomputed from current children on every read, even when the parent's
    // own begin lies beyond them.
    assert_eq!(derived_finish(100.0, &children), 6.0);
}

#[test]
fn lifetime_is_finish_minus_begin() {
    let leaf = Span {
        begin: 2.0,
        len: 0.0,
    };
    assert_eq!(leaf.lifetime(), 0.0);
    assert_eq!(leaf.finish(), leaf.begin());

    let span = Span {
        begin: 2.0,
        len: 3.0,
    };
    assert_eq!(span.lifetime(), 3.0);
}
