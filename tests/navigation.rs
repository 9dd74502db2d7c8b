// SPDX-License-Identifier: MPL-2.0
//! End-to-end walkthrough of the navigation state machine over the built-in
//! collection, exercised through the public API only.

use art_space::gallery::{ControlArrangement, Gallery, GalleryNavigator};

#[test]
fn full_walkthrough_of_the_builtin_collection() {
    let mut nav = GalleryNavigator::new(Gallery::builtin());
    assert_eq!(nav.gallery().len(), 4);

    // Start: first artwork, next-only controls pushed trailing.
    let p = nav.presentation();
    assert_eq!(p.current_index, 0);
    assert_eq!(p.total_count, 4);
    assert!(!p.can_go_previous);
    assert!(p.can_go_next);
    assert_eq!(p.arrangement, ControlArrangement::NextOnly);

    // Step forward three times: indices 1, 2, 3.
    nav.next();
    assert_eq!(nav.current_index(), 1);
    assert_eq!(nav.presentation().arrangement, ControlArrangement::Spread);

    nav.next();
    assert_eq!(nav.current_index(), 2);
    assert_eq!(nav.presentation().arrangement, ControlArrangement::Spread);

    nav.next();
    let p = nav.presentation();
    assert_eq!(p.current_index, 3);
    assert!(p.can_go_previous);
    assert!(!p.can_go_next);
    assert_eq!(p.arrangement, ControlArrangement::PreviousOnly);

    // Stepping past the last artwork changes nothing.
    nav.next();
    assert_eq!(nav.current_index(), 3);
    assert_eq!(
        nav.presentation().arrangement,
        ControlArrangement::PreviousOnly
    );
}

#[test]
fn previous_at_the_start_is_a_no_op() {
    let mut nav = GalleryNavigator::new(Gallery::builtin());
    nav.previous();
    assert_eq!(nav.current_index(), 0);
    assert_eq!(nav.presentation().arrangement, ControlArrangement::NextOnly);
}

#[test]
fn next_then_previous_restores_interior_positions() {
    let mut nav = GalleryNavigator::new(Gallery::builtin());
    nav.next();

    for _ in 0..nav.gallery().len() {
        let before = nav.current_index();
        if !nav.presentation().can_go_next {
            break;
        }
        nav.next();
        nav.previous();
        assert_eq!(nav.current_index(), before);
        nav.next();
    }
}

#[test]
fn active_artwork_always_matches_the_collection_lookup() {
    let mut nav = GalleryNavigator::new(Gallery::builtin());
    loop {
        let index = nav.presentation().current_index;
        let expected = nav.gallery().get(index).expect("index in range");
        assert_eq!(nav.active_artwork(), expected);
        if !nav.presentation().can_go_next {
            break;
        }
        nav.next();
    }
}

#[test]
fn enablement_flags_hold_at_every_observation_point() {
    let mut nav = GalleryNavigator::new(Gallery::builtin());
    let last = nav.gallery().last_index();

    // Sweep forward past the end, then backward past the start.
    for _ in 0..=last + 2 {
        let p = nav.presentation();
        assert_eq!(p.can_go_previous, p.current_index > 0);
        assert_eq!(p.can_go_next, p.current_index < last);
        nav.next();
    }
    for _ in 0..=last + 2 {
        let p = nav.presentation();
        assert_eq!(p.can_go_previous, p.current_index > 0);
        assert_eq!(p.can_go_next, p.current_index < last);
        nav.previous();
    }
}
