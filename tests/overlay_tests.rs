//! Rendering and visibility behaviour of the overlay surface.

mod common;

use common::*;
use crosshair_overlay::config::{DEFAULT_COLOR, DEFAULT_SIZE, DEFAULT_THICKNESS};
use crosshair_overlay::{Color, CrosshairImage, Drawable, Error, Point, Rect, Transition};

// === Procedural crosshair ===

#[test]
fn hidden_overlay_renders_nothing() {
    let overlay = overlay();
    overlay.set_size(40);
    overlay.set_custom_image(CrosshairImage::from_rgba(2, 2, vec![255; 16]));
    assert!(overlay.render().is_empty());
    assert!(overlay.render().is_empty());
}

#[test]
fn default_crosshair_is_red_lines() {
    let overlay = overlay();
    overlay.set_visible(true);
    let (segments, stroke) = lines(&overlay.render());
    assert_eq!(segments.len(), 2);
    assert_eq!(stroke.color, Color::rgba(255, 0, 0, 255));
    assert_eq!(stroke.width, DEFAULT_THICKNESS as f32);
    for s in segments.iter() {
        assert_eq!(half_length(s), DEFAULT_SIZE as f32);
        assert_eq!(midpoint(s), screen_center());
    }
}

#[test]
fn every_slider_size_is_rendered_exactly() {
    let overlay = overlay();
    overlay.set_visible(true);
    for size in 5..=100 {
        overlay.set_size(size);
        let (segments, _) = lines(&overlay.render());
        for s in segments.iter() {
            assert_eq!(half_length(s), size as f32, "size {size}");
        }
    }
}

#[test]
fn every_slider_thickness_is_rendered_exactly() {
    let overlay = overlay();
    overlay.set_visible(true);
    for thickness in 1..=10 {
        overlay.set_thickness(thickness);
        let (_, stroke) = lines(&overlay.render());
        assert_eq!(stroke.width, thickness as f32);
    }
}

#[test]
fn blue_crosshair_scenario() {
    let overlay = overlay();
    overlay.set_size(40);
    overlay.set_thickness(5);
    overlay.set_color(Color::BLUE);
    overlay.set_visible(true);

    let drawables = overlay.render();
    assert!(!drawables
        .iter()
        .any(|d| matches!(d, Drawable::Texture { .. })));
    let (segments, stroke) = lines(&drawables);
    assert_eq!(stroke.color, Color::BLUE);
    assert_eq!(stroke.width, 5.0);

    let c = screen_center();
    assert_eq!(
        segments,
        vec![
            (Point::new(c.x - 40.0, c.y), Point::new(c.x + 40.0, c.y)),
            (Point::new(c.x, c.y - 40.0), Point::new(c.x, c.y + 40.0)),
        ]
    );
}

// === Custom image ===

#[test]
fn image_takes_priority_over_later_line_changes() {
    let overlay = overlay();
    overlay.set_visible(true);
    let image = CrosshairImage::from_rgba(20, 10, vec![255; 20 * 10 * 4]);
    overlay.set_custom_image(image.clone());
    overlay.set_size(80);
    overlay.set_thickness(9);
    overlay.set_color(Color::GREEN);

    assert_eq!(overlay.crosshair().custom_image, Some(image.clone()));
    match overlay.render().as_slice() {
        [Drawable::Texture { image: drawn, region }] => {
            assert_eq!(drawn, &image);
            assert_eq!(region.width(), 20.0);
            assert_eq!(region.height(), 10.0);
            assert_eq!(region.center(), screen_center());
        }
        other => panic!("expected a texture, got {other:?}"),
    }
}

#[test]
fn loaded_image_is_centered() {
    let overlay = overlay();
    overlay.set_visible(true);
    let path = png_fixture("centered", 33, 17);
    overlay.load_custom_image(&path).unwrap();

    match overlay.render().as_slice() {
        [Drawable::Texture { image, region }] => {
            assert_eq!((image.width(), image.height()), (33, 17));
            assert_eq!(image.rgba().len(), 33 * 17 * 4);
            assert_eq!(
                *region,
                Rect::centered_at(screen_center(), 33.0, 17.0)
            );
        }
        other => panic!("expected a texture, got {other:?}"),
    }
    let _ = std::fs::remove_file(path);
}

#[test]
fn decode_failure_keeps_previous_crosshair() {
    let overlay = overlay();
    let previous = CrosshairImage::from_rgba(1, 1, vec![0; 4]);
    overlay.set_custom_image(previous.clone());
    overlay.set_size(30);

    let path = garbage_fixture("garbage");
    let err = overlay.load_custom_image(&path).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));

    let crosshair = overlay.crosshair();
    assert_eq!(crosshair.custom_image, Some(previous));
    assert_eq!(crosshair.size, 30);
    let _ = std::fs::remove_file(path);
}

// === Reset ===

#[test]
fn reset_restores_defaults_from_any_state() {
    let overlay = overlay();
    overlay.set_size(99);
    overlay.set_thickness(10);
    overlay.set_color(Color::rgba(1, 2, 3, 4));
    overlay.set_custom_image(CrosshairImage::from_rgba(1, 1, vec![0; 4]));

    overlay.reset_to_default();
    let crosshair = overlay.crosshair();
    assert_eq!(crosshair.size, 15);
    assert_eq!(crosshair.thickness, 2);
    assert_eq!(crosshair.color, DEFAULT_COLOR);
    assert!(crosshair.custom_image.is_none());

    overlay.reset_to_default();
    assert_eq!(overlay.crosshair(), crosshair);
}

#[test]
fn load_then_reset_shows_default_lines() {
    let overlay = overlay();
    let path = png_fixture("reset", 8, 8);
    overlay.load_custom_image(&path).unwrap();
    overlay.reset_to_default();
    overlay.set_visible(true);

    let (segments, stroke) = lines(&overlay.render());
    assert_eq!(stroke.color, Color::RED);
    assert_eq!(stroke.width, 2.0);
    assert!(segments.iter().all(|s| half_length(s) == 15.0));
    let _ = std::fs::remove_file(path);
}

// === Visibility reconciliation ===

#[test]
fn set_visible_waits_for_tick() {
    let overlay = overlay();
    assert!(!overlay.is_shown());
    overlay.set_visible(true);
    assert!(overlay.is_visible());
    assert!(!overlay.is_shown());

    assert_eq!(overlay.tick(), Some(Transition::Show));
    assert!(overlay.is_shown());
    assert_eq!(overlay.tick(), None);

    overlay.set_visible(false);
    assert_eq!(overlay.tick(), Some(Transition::Hide));
    assert!(!overlay.is_shown());
}

#[test]
fn last_request_before_tick_wins() {
    let overlay = overlay();
    overlay.set_visible(true);
    overlay.set_visible(false);
    assert_eq!(overlay.tick(), None);
    assert!(!overlay.is_shown());

    overlay.tick();
    overlay.set_visible(true);
    overlay.set_visible(false);
    overlay.set_visible(true);
    assert_eq!(overlay.tick(), Some(Transition::Show));
}

#[test]
fn clones_share_state() {
    let overlay = overlay();
    let other = overlay.clone();
    other.set_size(42);
    other.set_visible(true);
    assert_eq!(overlay.crosshair().size, 42);
    assert!(overlay.is_visible());
}
