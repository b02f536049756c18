//! A top/bottom tube pair with an invisible score zone in the opening.
//!
//! Pairs are never dropped while Play runs: once one scrolls off the left
//! edge it is moved forward with [`ObstaclePair::reposition`].

use glam::Vec2;
use rand::Rng;

use crate::assets::{SoundAsset, TextureAsset};
use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::presenter::{Presenter, SoundId, Texture};

/// Resources shared by every pair in the pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TubeSet {
    pub top: Texture,
    pub bottom: Texture,
    pub point: SoundId,
}

impl TubeSet {
    pub fn load(presenter: &mut dyn Presenter) -> Self {
        Self {
            top: presenter.load_texture(TextureAsset::TopTube),
            bottom: presenter.load_texture(TextureAsset::BottomTube),
            point: presenter.load_sound(SoundAsset::Point),
        }
    }

    pub fn release(self, presenter: &mut dyn Presenter) {
        presenter.unload_texture(self.top);
        presenter.unload_texture(self.bottom);
        presenter.unload_sound(self.point);
    }
}

#[derive(Clone, Debug)]
pub struct ObstaclePair {
    tubes: TubeSet,
    pos_top: Vec2,
    pos_bottom: Vec2,
    pos_score: Vec2,
    bounds_top: Rect,
    bounds_bottom: Rect,
    bounds_score: Rect,

    gap: f32,
    lowest_opening: f32,
    fluctuation: u32,
    banish: f32,
    point_volume: f32,
}

impl ObstaclePair {
    pub fn new<R: Rng + ?Sized>(x: f32, tubes: TubeSet, config: &GameConfig, rng: &mut R) -> Self {
        let top_size = Vec2::new(tubes.top.width as f32, tubes.top.height as f32);
        let bottom_size = Vec2::new(tubes.bottom.width as f32, tubes.bottom.height as f32);

        let mut pair = Self {
            tubes,
            pos_top: Vec2::ZERO,
            pos_bottom: Vec2::ZERO,
            pos_score: Vec2::ZERO,
            bounds_top: Rect::new(0.0, 0.0, top_size.x, top_size.y),
            bounds_bottom: Rect::new(0.0, 0.0, bottom_size.x, bottom_size.y),
            bounds_score: Rect::new(0.0, 0.0, bottom_size.x, config.tube_gap),
            gap: config.tube_gap,
            lowest_opening: config.lowest_opening,
            fluctuation: config.fluctuation,
            banish: config.score_zone_banish,
            point_volume: config.point_volume,
        };
        pair.reposition(x, rng);
        pair
    }

    /// Move the pair to `x` with a freshly drawn opening height.
    pub fn reposition<R: Rng + ?Sized>(&mut self, x: f32, rng: &mut R) {
        debug_assert!(self.fluctuation > 0);
        let offset = rng.gen_range(0..self.fluctuation) as f32;
        let bottom_height = self.tubes.bottom.height as f32;

        self.pos_top = Vec2::new(x, offset + self.gap + self.lowest_opening);
        self.pos_bottom = Vec2::new(x, self.pos_top.y - self.gap - bottom_height);
        self.pos_score = Vec2::new(
            x + (self.tubes.bottom.width / 2) as f32,
            self.pos_bottom.y + bottom_height,
        );

        self.bounds_top.set_position(self.pos_top);
        self.bounds_bottom.set_position(self.pos_bottom);
        self.bounds_score.set_position(self.pos_score);
    }

    /// True when `player` overlaps either tube.
    pub fn collides(&self, player: &Rect) -> bool {
        player.overlaps(&self.bounds_top) || player.overlaps(&self.bounds_bottom)
    }

    /// True when `player` is inside the score zone. A hit pushes the zone out
    /// of play and plays the point sound, so one pass scores once.
    pub fn scores(&mut self, player: &Rect, presenter: &mut dyn Presenter) -> bool {
        let scored = player.overlaps(&self.bounds_score);
        if scored {
            self.bounds_score
                .set_position(self.pos_score + Vec2::splat(self.banish));
            presenter.play_sound(self.tubes.point, self.point_volume);
        }
        scored
    }

    /// World x of the pair's trailing edge.
    pub fn right_edge(&self) -> f32 {
        self.pos_top.x + self.tubes.top.width as f32
    }

    pub fn top_position(&self) -> Vec2 {
        self.pos_top
    }

    pub fn bottom_position(&self) -> Vec2 {
        self.pos_bottom
    }

    pub fn score_position(&self) -> Vec2 {
        self.pos_score
    }

    pub fn top_bounds(&self) -> &Rect {
        &self.bounds_top
    }

    pub fn bottom_bounds(&self) -> &Rect {
        &self.bounds_bottom
    }

    pub fn score_bounds(&self) -> &Rect {
        &self.bounds_score
    }

    pub fn tubes(&self) -> &TubeSet {
        &self.tubes
    }
}
