//! Integration tests for the hue mapping

use core::f32::consts::PI;

use tilt_hue::hue::{COLOR_POSITIONS, SEGMENT_WIDTH};
use tilt_hue::{RgbColor, color_position, map_angle, rainbow_color};

#[test]
fn segment_boundaries_match_rainbow_table() {
    let expected = [
        (0, RgbColor::new(255, 0, 0)),
        (256, RgbColor::new(255, 255, 0)),
        (512, RgbColor::new(0, 255, 0)),
        (768, RgbColor::new(0, 255, 255)),
        (1024, RgbColor::new(0, 0, 255)),
        (1280, RgbColor::new(255, 0, 255)),
        (1536, RgbColor::new(255, 0, 0)),
    ];

    for (position, color) in expected {
        assert_eq!(rainbow_color(position), color, "position {}", position);
    }
}

#[test]
fn last_position_of_each_segment_meets_next_boundary() {
    assert_eq!(rainbow_color(255), RgbColor::new(255, 255, 0));
    assert_eq!(rainbow_color(511), RgbColor::new(0, 255, 0));
    assert_eq!(rainbow_color(767), RgbColor::new(0, 255, 255));
    assert_eq!(rainbow_color(1023), RgbColor::new(0, 0, 255));
    assert_eq!(rainbow_color(1279), RgbColor::new(255, 0, 255));
    assert_eq!(rainbow_color(1535), RgbColor::new(255, 0, 0));
}

#[test]
fn positions_past_the_spectrum_are_red() {
    assert_eq!(rainbow_color(COLOR_POSITIONS), RgbColor::new(255, 0, 0));
    assert_eq!(rainbow_color(u16::MAX), RgbColor::new(255, 0, 0));
}

#[test]
fn spectrum_is_continuous_across_positions() {
    let mut previous = rainbow_color(0);
    for position in 1..COLOR_POSITIONS {
        let color = rainbow_color(position);
        let diff = (i16::from(color.red) - i16::from(previous.red)).abs()
            + (i16::from(color.green) - i16::from(previous.green)).abs()
            + (i16::from(color.blue) - i16::from(previous.blue)).abs();

        // Adjacent segments share their boundary color.
        let expected = if position % SEGMENT_WIDTH == 0 { 0 } else { 1 };
        assert_eq!(diff, expected, "position {}", position);
        previous = color;
    }
}

#[test]
fn angle_zero_maps_to_top_of_spectrum() {
    assert_eq!(color_position(0.0), 1535);
    assert_eq!(map_angle(0.0), RgbColor::new(255, 0, 0));
}

#[test]
fn half_turn_maps_to_bottom_of_spectrum() {
    assert_eq!(color_position(PI), 0);
    assert_eq!(map_angle(PI), RgbColor::new(255, 0, 0));
}

#[test]
fn quarter_turn_is_teal() {
    // 767.5 rounds to either side of the green/teal boundary; both give teal.
    let position = color_position(PI / 2.0);
    assert!(position == 767 || position == 768);
    assert_eq!(map_angle(PI / 2.0), RgbColor::new(0, 255, 255));
}

#[test]
fn angles_just_outside_range_are_clamped() {
    assert_eq!(map_angle(-1.0e-6), map_angle(0.0));
    assert_eq!(map_angle(PI + 1.0e-6), map_angle(PI));
}

#[test]
fn increasing_tilt_walks_down_the_spectrum() {
    let mut previous = color_position(0.0);
    for step in 1..=100 {
        let angle = PI * step as f32 / 100.0;
        let position = color_position(angle);
        assert!(position <= previous, "angle {}", angle);
        previous = position;
    }
}
