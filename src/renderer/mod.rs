//! WebGPU rendering module
//!
//! Sprites are plain data: the draw list is rebuilt from the game state
//! each frame and drawn as textured quads from one atlas.

pub mod pipeline;
pub mod sprites;
pub mod vertex;

pub use pipeline::{AtlasImage, RenderError, SpriteRenderState};
pub use sprites::{SpriteDraw, draw_list, placeholder_atlas, sprite_vertices};
pub use vertex::Vertex;
