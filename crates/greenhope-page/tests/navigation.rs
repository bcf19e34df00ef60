//! End-to-end navigation flows on a laid-out page.

use greenhope_page::content::green_hope;
use greenhope_page::layout::Rect;
use greenhope_page::{Host, PageController, SectionId, Viewport};
use greenhope_types::backend::BitmapMeasure;
use greenhope_types::config::PageConfig;
use greenhope_types::input::{InputEvent, Key};

fn setup(width: u32) -> (Viewport, PageController, PageConfig) {
    let config = PageConfig {
        screen_width: width,
        screen_height: 600,
        ..PageConfig::default()
    };
    let mut viewport = Viewport::new(green_hope(), &config, &BitmapMeasure);
    let page = PageController::mount(&mut viewport, &config);
    (viewport, page, config)
}

fn center(rect: Rect) -> InputEvent {
    InputEvent::PointerClick {
        x: rect.x + rect.w as i32 / 2,
        y: rect.y + rect.h as i32 / 2,
    }
}

fn settle(viewport: &mut Viewport, page: &mut PageController) {
    for _ in 0..200 {
        let animating = viewport.tick(16);
        page.poll_scroll(viewport);
        if !animating {
            break;
        }
    }
}

#[test]
fn page_top_has_no_active_section() {
    let (viewport, mut page, _) = setup(1024);
    assert_eq!(viewport.scroll_offset(), 0);
    page.on_scroll(&viewport);
    assert_eq!(page.nav().active_section(), None);
}

#[test]
fn hamburger_then_drawer_link_scrolls_to_vision() {
    let (mut viewport, mut page, _) = setup(375);
    let button = viewport.layout().header.menu_button.expect("narrow header has a button");

    assert!(page.handle_input(&center(button), &mut viewport, &BitmapMeasure));
    assert!(page.nav().is_menu_open());

    let (_, entry) = *viewport
        .layout()
        .drawer
        .entries
        .iter()
        .find(|(id, _)| *id == SectionId::Vision)
        .unwrap();
    assert!(page.handle_input(&center(entry), &mut viewport, &BitmapMeasure));
    assert!(!page.nav().is_menu_open());

    let vision = viewport.element_bounds(SectionId::Vision).unwrap();
    let target = vision.top - 96;
    assert!(viewport.scroll().is_animating());
    for _ in 0..10 {
        viewport.tick(16);
    }
    let midway = viewport.scroll_offset();
    assert!(midway > 0 && midway < target);

    settle(&mut viewport, &mut page);
    assert_eq!(viewport.scroll_offset(), target);

    // The landing point sits in the margin above the section; one wheel
    // notch brings the section's spy line into range.
    viewport.wheel(1);
    page.poll_scroll(&viewport);
    assert_eq!(page.nav().active_section(), Some(SectionId::Vision));
}

#[test]
fn desktop_nav_click_scrolls_and_highlights_on_scroll() {
    let (mut viewport, mut page, _) = setup(1024);
    assert!(viewport.layout().header.menu_button.is_none());
    let (_, mission) = viewport.layout().header.nav[1];

    assert!(page.handle_input(&center(mission), &mut viewport, &BitmapMeasure));
    settle(&mut viewport, &mut page);
    let bounds = viewport.element_bounds(SectionId::Mission).unwrap();
    assert_eq!(viewport.scroll_offset(), bounds.top - 96);

    viewport.wheel(2);
    page.poll_scroll(&viewport);
    assert_eq!(page.nav().active_section(), Some(SectionId::Mission));
}

#[test]
fn every_section_is_reachable_by_scrolling() {
    let (mut viewport, mut page, _) = setup(1024);
    let mut seen = Vec::new();
    for _ in 0..2000 {
        page.handle_input(&InputEvent::KeyPress(Key::Down), &mut viewport, &BitmapMeasure);
        page.poll_scroll(&viewport);
        if let Some(id) = page.nav().active_section() {
            if seen.last() != Some(&id) {
                seen.push(id);
            }
        }
    }
    assert_eq!(seen, SectionId::ALL.to_vec());
}

#[test]
fn widening_the_window_closes_the_drawer() {
    let (mut viewport, mut page, _) = setup(375);
    page.handle_input(&InputEvent::KeyPress(Key::Menu), &mut viewport, &BitmapMeasure);
    assert!(page.nav().is_menu_open());

    let resize = InputEvent::Resize {
        width: 1024,
        height: 600,
    };
    page.handle_input(&resize, &mut viewport, &BitmapMeasure);
    assert!(!viewport.is_narrow());
    assert!(!page.nav().is_menu_open());
}

#[test]
fn menu_key_ignored_on_wide_viewport() {
    let (mut viewport, mut page, _) = setup(1024);
    assert!(!page.handle_input(&InputEvent::KeyPress(Key::Menu), &mut viewport, &BitmapMeasure));
    assert!(!page.nav().is_menu_open());
}

#[test]
fn unmount_releases_the_scroll_listener() {
    let (viewport, page, _) = setup(1024);
    assert_eq!(viewport.listener_count(), 1);
    page.unmount();
    assert_eq!(viewport.listener_count(), 0);
}
