//! Scene assembly
//!
//! Turns the game state into one triangle list, back to front: background,
//! sling, blocks, pigs, aim preview, bird.

use glam::Vec2;
use std::f32::consts::PI;

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::{Vertex, colors};
use crate::consts::GRASS_FRACTION;
use crate::settings::{PreviewMode, Settings};
use crate::sim::{GameState, PREVIEW_STEPS, predict_trajectory};
use crate::sling_anchor;
use crate::tuning::Tuning;

/// Sling frame: left foot, fork, right foot
const SLING_FRAME: [Vec2; 3] = [
    Vec2::new(110.0, 420.0),
    Vec2::new(140.0, 300.0),
    Vec2::new(170.0, 420.0),
];
/// Where the bands attach to the frame
const BAND_BACK: Vec2 = Vec2::new(140.0, 305.0);
const BAND_FRONT: Vec2 = Vec2::new(170.0, 410.0);

pub fn block_color(hit: bool) -> [f32; 4] {
    if hit { colors::BLOCK_HIT } else { colors::BLOCK }
}

pub fn pig_color(hit: bool) -> [f32; 4] {
    if hit { colors::PIG_HIT } else { colors::PIG }
}

/// Build the full frame
pub fn build_scene(state: &GameState, settings: &Settings, tuning: &Tuning) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(2048);
    background(&mut vertices, state.bounds);
    sling(&mut vertices, state.bird.pos);
    blocks(&mut vertices, state);
    pigs(&mut vertices, state);
    aim_preview(&mut vertices, state, settings, tuning);
    bird(&mut vertices, state);
    vertices
}

fn background(out: &mut Vec<Vertex>, bounds: Vec2) {
    let grass_y = bounds.y * GRASS_FRACTION;
    let ground_y = crate::ground_line(bounds.y);
    out.extend(shapes::rect(
        Vec2::new(0.0, grass_y),
        Vec2::new(bounds.x, bounds.y - grass_y),
        colors::GRASS,
    ));
    out.extend(shapes::rect(
        Vec2::new(0.0, ground_y),
        Vec2::new(bounds.x, bounds.y - ground_y),
        colors::SAND,
    ));

    // Tree
    out.extend(shapes::rect(
        Vec2::new(40.0, 330.0),
        Vec2::new(18.0, 120.0),
        colors::TREE_TRUNK,
    ));
    out.extend(shapes::sector(
        Vec2::new(52.0, 320.0),
        26.0,
        PI,
        2.0 * PI,
        colors::TREE_TOP,
        CIRCLE_SEGMENTS / 2,
    ));
}

fn sling(out: &mut Vec<Vertex>, bird_pos: Vec2) {
    out.extend(shapes::polyline(&SLING_FRAME, 6.0, colors::SLING_FRAME));
    out.extend(shapes::polyline(
        &[BAND_BACK, bird_pos, BAND_FRONT],
        4.0,
        colors::SLING_BAND,
    ));
}

fn blocks(out: &mut Vec<Vertex>, state: &GameState) {
    for block in &state.blocks {
        out.extend(shapes::rect(block.pos, block.size, block_color(block.hit)));
        out.extend(shapes::rect_outline(block.pos, block.size, 1.0, colors::BLOCK_EDGE));
    }
}

fn pigs(out: &mut Vec<Vertex>, state: &GameState) {
    for pig in &state.pigs {
        out.extend(shapes::circle(pig.pos, pig.radius, pig_color(pig.hit), CIRCLE_SEGMENTS));
        let eye = if pig.hit { colors::PIG_EYE_HIT } else { colors::PIG_EYE };
        for offset in [Vec2::new(-5.0, -4.0), Vec2::new(6.0, -4.0)] {
            out.extend(shapes::circle(pig.pos + offset, 3.0, eye, 8));
        }
    }
}

fn aim_preview(out: &mut Vec<Vertex>, state: &GameState, settings: &Settings, tuning: &Tuning) {
    if !state.is_dragging() {
        return;
    }
    match settings.preview {
        PreviewMode::Line => {
            out.extend(shapes::dashed_line(
                state.bird.pos,
                sling_anchor(),
                2.0,
                6.0,
                6.0,
                colors::AIM,
            ));
        }
        PreviewMode::Arc => {
            // Every other tick keeps the dots readable
            for point in predict_trajectory(state, tuning, PREVIEW_STEPS).iter().step_by(2) {
                out.extend(shapes::circle(*point, 3.0, colors::AIM, 8));
            }
        }
        PreviewMode::Off => {}
    }
}

fn bird(out: &mut Vec<Vertex>, state: &GameState) {
    let bird = &state.bird;
    out.extend(shapes::circle(bird.pos, bird.radius, colors::BIRD, CIRCLE_SEGMENTS));
    out.extend(shapes::circle(bird.pos + Vec2::new(6.0, -4.0), 5.0, colors::BIRD_EYE, 12));
    out.extend(shapes::circle(bird.pos + Vec2::new(7.0, -4.0), 2.0, colors::BIRD_PUPIL, 8));
}
