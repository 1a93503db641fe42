//! Sprite draw list
//!
//! Every visible element is one `SpriteDraw`: a source rectangle in the
//! atlas, a destination rectangle on the canvas and a rotation about the
//! destination center. The list is built from a read-only `GameState`.

use glam::Vec2;

use super::pipeline::AtlasImage;
use super::vertex::Vertex;
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Rect};

/// Atlas source rectangles
pub mod atlas {
    use crate::sim::Rect;

    pub const BACKGROUND: Rect = Rect::new(0.0, 0.0, 275.0, 226.0);
    pub const FOREGROUND: Rect = Rect::new(276.0, 0.0, 224.0, 112.0);
    pub const BIRD: [Rect; 4] = [
        Rect::new(276.0, 112.0, 34.0, 26.0),
        Rect::new(276.0, 139.0, 34.0, 26.0),
        Rect::new(276.0, 164.0, 34.0, 26.0),
        Rect::new(276.0, 139.0, 34.0, 26.0),
    ];
    pub const PIPE_BOTTOM: Rect = Rect::new(502.0, 0.0, 53.0, 400.0);
    pub const PIPE_TOP: Rect = Rect::new(553.0, 0.0, 53.0, 400.0);
    pub const GET_READY: Rect = Rect::new(0.0, 228.0, 173.0, 152.0);
    pub const GAME_OVER: Rect = Rect::new(175.0, 228.0, 225.0, 202.0);
}

/// Flat-colored atlas with the same layout, used when the sprite sheet
/// cannot be loaded
pub fn placeholder_atlas() -> AtlasImage {
    const SIZE: (u32, u32) = (606, 430);
    let regions: [(Rect, [u8; 4]); 9] = [
        (atlas::BACKGROUND, [112, 197, 206, 255]),
        (atlas::FOREGROUND, [222, 216, 149, 255]),
        (atlas::BIRD[0], [250, 200, 50, 255]),
        (atlas::BIRD[1], [250, 200, 50, 255]),
        (atlas::BIRD[2], [250, 200, 50, 255]),
        (atlas::PIPE_BOTTOM, [115, 191, 46, 255]),
        (atlas::PIPE_TOP, [115, 191, 46, 255]),
        (atlas::GET_READY, [240, 140, 40, 255]),
        (atlas::GAME_OVER, [240, 140, 40, 255]),
    ];

    let (width, height) = SIZE;
    let mut rgba = vec![0u8; width as usize * height as usize * 4];
    let mut fill = |r: Rect, color: [u8; 4]| {
        for y in r.top() as u32..(r.bottom() as u32).min(height) {
            for x in r.left() as u32..(r.right() as u32).min(width) {
                let i = (y * width + x) as usize * 4;
                rgba[i..i + 4].copy_from_slice(&color);
            }
        }
    };
    for (r, color) in regions {
        fill(r, color);
    }

    AtlasImage { width, height, rgba }
}

/// One textured quad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    pub src: Rect,
    pub dst: Rect,
    /// Radians, clockwise on screen
    pub rotation: f32,
}

impl SpriteDraw {
    pub fn new(src: Rect, x: f32, y: f32) -> Self {
        Self {
            src,
            dst: Rect::new(x, y, src.w, src.h),
            rotation: 0.0,
        }
    }
}

/// Build the frame's draw list, back to front
pub fn draw_list(state: &GameState) -> Vec<SpriteDraw> {
    let mut draws = Vec::with_capacity(8 + state.pipes.pairs.len() * 2);

    let bg = atlas::BACKGROUND;
    let bg_y = CANVAS_HEIGHT - bg.h;
    draws.push(SpriteDraw::new(bg, 0.0, bg_y));
    draws.push(SpriteDraw::new(bg, bg.w, bg_y));

    for pair in &state.pipes.pairs {
        draws.push(SpriteDraw::new(atlas::PIPE_TOP, pair.x, pair.y));
        draws.push(SpriteDraw::new(atlas::PIPE_BOTTOM, pair.x, pair.bottom_y()));
    }

    let fg = atlas::FOREGROUND;
    let fg_y = CANVAS_HEIGHT - fg.h;
    draws.push(SpriteDraw::new(fg, state.foreground.x, fg_y));
    draws.push(SpriteDraw::new(fg, state.foreground.x + fg.w, fg_y));

    let bird = &state.bird;
    let src = atlas::BIRD[bird.frame % atlas::BIRD.len()];
    draws.push(SpriteDraw {
        src,
        dst: Rect::new(
            bird.pos.x - bird.width / 2.0,
            bird.pos.y - bird.height / 2.0,
            bird.width,
            bird.height,
        ),
        rotation: bird.rotation,
    });

    match state.phase {
        GamePhase::Ready => {
            let r = atlas::GET_READY;
            draws.push(SpriteDraw::new(r, CANVAS_WIDTH / 2.0 - r.w / 2.0, 80.0));
        }
        GamePhase::Over => {
            let r = atlas::GAME_OVER;
            draws.push(SpriteDraw::new(r, CANVAS_WIDTH / 2.0 - r.w / 2.0, 90.0));
        }
        GamePhase::Playing => {}
    }

    draws
}

/// Convert canvas coordinates to normalized device coordinates
#[inline]
pub fn canvas_to_ndc(p: Vec2) -> Vec2 {
    Vec2::new(
        p.x / CANVAS_WIDTH * 2.0 - 1.0,
        1.0 - p.y / CANVAS_HEIGHT * 2.0,
    )
}

/// Expand sprites into two triangles each
pub fn sprite_vertices(draws: &[SpriteDraw], atlas_size: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(draws.len() * 6);

    for draw in draws {
        let d = draw.dst;
        let center = Vec2::new(d.x + d.w / 2.0, d.y + d.h / 2.0);
        let half = Vec2::new(d.w / 2.0, d.h / 2.0);
        let (sin, cos) = draw.rotation.sin_cos();

        let corner = |sx: f32, sy: f32| -> Vec2 {
            let off = Vec2::new(sx * half.x, sy * half.y);
            let rotated = Vec2::new(off.x * cos - off.y * sin, off.x * sin + off.y * cos);
            canvas_to_ndc(center + rotated)
        };

        let s = draw.src;
        let u0 = s.left() / atlas_size.x;
        let u1 = s.right() / atlas_size.x;
        let v0 = s.top() / atlas_size.y;
        let v1 = s.bottom() / atlas_size.y;

        let tl = corner(-1.0, -1.0);
        let tr = corner(1.0, -1.0);
        let bl = corner(-1.0, 1.0);
        let br = corner(1.0, 1.0);

        vertices.push(Vertex::new(tl.x, tl.y, u0, v0));
        vertices.push(Vertex::new(bl.x, bl.y, u0, v1));
        vertices.push(Vertex::new(tr.x, tr.y, u1, v0));

        vertices.push(Vertex::new(tr.x, tr.y, u1, v0));
        vertices.push(Vertex::new(bl.x, bl.y, u0, v1));
        vertices.push(Vertex::new(br.x, br.y, u1, v1));
    }

    vertices
}
