use super::*;

use crate::foundation::error::ReelgridError;

#[test]
fn gaps_divide_the_screen_into_twelve() {
    let grid = GridSystem::new((1920.0, 1080.0));
    assert_eq!(grid.column_gap, 160.0);
    assert_eq!(grid.row_gap, 90.0);
}

#[test]
fn center_anchor_centers_in_the_cell_and_ignores_offset() {
    let grid = GridSystem::new((1200.0, 1200.0));
    let p = grid.coords((100.0, 100.0), (0.0, 0.0), Anchor::Center, (0.0, 0.0));
    assert_eq!((p.x, p.y), (0.0, 0.0));
    // Offsets do not move a centered element.
    let p = grid.coords((100.0, 100.0), (0.0, 0.0), Anchor::Center, (3.0, -3.0));
    assert_eq!((p.x, p.y), (0.0, 0.0));
}

#[test]
fn each_anchor_has_its_own_base_point_and_offset_sign() {
    // 100x50 cells; element 40x20 at cell (row 2, col 3); offset (1, 1)
    // scales by half the element dimension on the anchor's own axis.
    let grid = GridSystem::new((1200.0, 600.0));
    let size = (40.0, 20.0);
    let cell = (2.0, 3.0);
    let offset = (1.0, 1.0);

    let at = |anchor| {
        let p = grid.coords(size, cell, anchor, offset);
        (p.x, p.y)
    };

    assert_eq!(at(Anchor::Center), (330.0, 115.0));
    assert_eq!(at(Anchor::Left), (280.0, 115.0));
    assert_eq!(at(Anchor::Right), (380.0, 115.0));
    assert_eq!(at(Anchor::Top), (330.0, 90.0));
    assert_eq!(at(Anchor::Bottom), (330.0, 140.0));
    assert_eq!(at(Anchor::TopLeft), (280.0, 90.0));
    assert_eq!(at(Anchor::TopRight), (380.0, 90.0));
    assert_eq!(at(Anchor::BottomLeft), (280.0, 140.0));
    assert_eq!(at(Anchor::BottomRight), (380.0, 140.0));
}

#[test]
fn corner_anchors_butt_against_cell_edges_without_offset() {
    let grid = GridSystem::new((1200.0, 600.0));
    let size = (40.0, 20.0);
    let p = grid.coords(size, (0.0, 0.0), Anchor::TopLeft, (0.0, 0.0));
    assert_eq!((p.x, p.y), (0.0, 0.0));
    let p = grid.coords(size, (0.0, 0.0), Anchor::BottomRight, (0.0, 0.0));
    assert_eq!((p.x, p.y), (100.0 - 40.0, 50.0 - 20.0));
}

#[test]
fn anchor_parse_is_case_and_whitespace_insensitive() {
    assert_eq!(Anchor::parse("center").unwrap(), Anchor::Center);
    assert_eq!(Anchor::parse("  TopLeft ").unwrap(), Anchor::TopLeft);
    assert_eq!(Anchor::parse("BOTTOMRIGHT").unwrap(), Anchor::BottomRight);
    assert_eq!("bottom".parse::<Anchor>().unwrap(), Anchor::Bottom);
}

#[test]
fn unknown_anchor_is_rejected_not_defaulted() {
    let err = Anchor::parse("middle").unwrap_err();
    assert!(matches!(err, ReelgridError::InvalidArgument(_)), "{err}");
}
