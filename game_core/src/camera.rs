//! Pseudo-3D perspective camera
//!
//! Maps world-space points (x lateral, y forward, z up; goal line at y = 0)
//! to screen pixels and depth-scaled sprite sizes. The camera sits behind
//! the kick spot looking toward -y, optionally tilted downward.

use glam::Vec3;
use log::warn;

use crate::params::Config;

/// Minimum effective depth for perspective scaling, to avoid division
/// blow-up for points at or behind the camera plane.
pub const MIN_PERSPECTIVE_DEPTH: f32 = 0.1;

/// Sentinel pixel coordinates for points too close to or behind the camera.
pub const OFFSCREEN: (i32, i32) = (-9999, -9999);

const MIN_FOV_DEGREES: f32 = 1.0;
const MAX_FOV_DEGREES: f32 = 179.0;

/// Camera extrinsics/intrinsics with precomputed projection terms.
///
/// All derived values are recomputed together in `configure`, so a reload
/// is an atomic swap from the point of view of projection calls.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vec3,
    fov_degrees: f32,
    downlook_degrees: f32,
    screen_width: f32,
    screen_height: f32,
    focal_length_pixels: f32,
    cos_downlook: f32,
    sin_downlook: f32,
}

impl Camera {
    pub fn from_config(config: &Config, screen_width: f32, screen_height: f32) -> Self {
        let mut camera = Self {
            position: Vec3::ZERO,
            fov_degrees: 0.0,
            downlook_degrees: 0.0,
            screen_width,
            screen_height,
            focal_length_pixels: 0.0,
            cos_downlook: 1.0,
            sin_downlook: 0.0,
        };
        camera.configure(
            config.camera_position(),
            config.camera_fov_degrees,
            config.camera_downlook_degrees,
            screen_width,
            screen_height,
        );
        camera
    }

    /// Set extrinsics/intrinsics and recompute every derived value.
    /// Out-of-range fov is clamped to [1°, 179°] with a warning, never fatal.
    pub fn configure(
        &mut self,
        position: Vec3,
        fov_degrees: f32,
        downlook_degrees: f32,
        screen_width: f32,
        screen_height: f32,
    ) {
        let safe_fov = fov_degrees.clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES);
        if safe_fov != fov_degrees {
            warn!("camera fov {fov_degrees} degrees out of range, clamped to {safe_fov}");
        }

        self.position = position;
        self.fov_degrees = safe_fov;
        self.downlook_degrees = downlook_degrees;
        self.screen_width = screen_width;
        self.screen_height = screen_height;

        // focal_length = (screen_width / 2) / tan(fov / 2)
        self.focal_length_pixels = (screen_width / 2.0) / (safe_fov.to_radians() / 2.0).tan();

        let downlook = downlook_degrees.to_radians();
        self.cos_downlook = downlook.cos();
        self.sin_downlook = downlook.sin();
    }

    /// Re-read camera parameters from a freshly reloaded config.
    pub fn reconfigure(&mut self, config: &Config) {
        self.configure(
            config.camera_position(),
            config.camera_fov_degrees,
            config.camera_downlook_degrees,
            self.screen_width,
            self.screen_height,
        );
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    pub fn focal_length_pixels(&self) -> f32 {
        self.focal_length_pixels
    }

    /// Transform a world point into view space.
    ///
    /// Returns (view_x right, view_y up, depth along the forward axis).
    /// Forward is (0, -cos a, -sin a); up is (0, sin a, cos a).
    pub fn view_space(&self, world: Vec3) -> (f32, f32, f32) {
        let rel = world - self.position;
        let depth = rel.y * (-self.cos_downlook) + rel.z * (-self.sin_downlook);
        let view_x = rel.x;
        let view_y = rel.y * self.sin_downlook + rel.z * self.cos_downlook;
        (view_x, view_y, depth)
    }

    /// Perspective scaling factor (focal_length / depth) for depth > 0.
    ///
    /// Callers are expected to have already rejected depths below
    /// `MIN_PERSPECTIVE_DEPTH`; only the non-positive case is guarded here.
    pub fn projection_scale(&self, depth: f32) -> f32 {
        if depth <= 0.0 {
            return 0.0;
        }
        self.focal_length_pixels / depth
    }

    /// Project a world point to integer screen pixels.
    ///
    /// Points closer than `MIN_PERSPECTIVE_DEPTH` yield `OFFSCREEN` rather
    /// than failing.
    pub fn project_to_screen(&self, world: Vec3) -> (i32, i32) {
        let (view_x, view_y, depth) = self.view_space(world);
        if depth < MIN_PERSPECTIVE_DEPTH {
            return OFFSCREEN;
        }

        let screen_x = self.screen_width / 2.0 + view_x * self.focal_length_pixels / depth;
        // Screen y grows downward while view_y grows upward
        let screen_y = self.screen_height / 2.0 - view_y * self.focal_length_pixels / depth;

        (screen_x.round() as i32, screen_y.round() as i32)
    }

    /// Display size in pixels for a sprite of the given base world size.
    /// Too-close points get (0, 0); visible sprites are at least 1x1.
    pub fn sprite_display_size(&self, base_width: f32, base_height: f32, world: Vec3) -> (u32, u32) {
        let (_view_x, _view_y, depth) = self.view_space(world);
        if depth < MIN_PERSPECTIVE_DEPTH {
            return (0, 0);
        }

        let scale = self.projection_scale(depth);
        let display_width = (base_width * scale).max(1.0) as u32;
        let display_height = (base_height * scale).max(1.0) as u32;
        (display_width, display_height)
    }

    /// Invert the projection onto the ground plane (z = 0).
    ///
    /// Returns the world point whose projection is the given pixel, or None
    /// when the pixel's ray runs parallel to the ground or intersects it
    /// behind the near plane.
    pub fn screen_to_ground(&self, screen_x: f32, screen_y: f32) -> Option<Vec3> {
        let u = (screen_x - self.screen_width / 2.0) / self.focal_length_pixels;
        let v = (self.screen_height / 2.0 - screen_y) / self.focal_length_pixels;

        // On the ground plane rel_z = -camera_z; solving
        // view_y = v * depth for rel_y:
        let denom = self.sin_downlook + v * self.cos_downlook;
        if denom.abs() < 1e-6 {
            return None;
        }
        let cam_z = self.position.z;
        let rel_y = cam_z * (self.cos_downlook + v * self.sin_downlook) / denom;

        let depth = rel_y * (-self.cos_downlook) + cam_z * self.sin_downlook;
        if depth < MIN_PERSPECTIVE_DEPTH {
            return None;
        }

        let rel_x = u * depth;
        Some(Vec3::new(
            self.position.x + rel_x,
            self.position.y + rel_y,
            0.0,
        ))
    }
}
