//! Horizontal camera follow
//!
//! The camera is read by renderers only and never feeds back into physics.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{CAMERA_SLACK, CAMERA_SMOOTHING, WINDOW_SIZE};

/// How the camera tracks the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraMode {
    /// Player always in the middle of the screen
    Centered,
    /// Camera moves only once the player leaves a band around the center
    #[default]
    Window,
    /// Like `Window`, then eases toward the center
    Smooth,
}

impl CameraMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraMode::Centered => "centered",
            CameraMode::Window => "window",
            CameraMode::Smooth => "smooth",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "centered" | "center" => Some(CameraMode::Centered),
            "window" => Some(CameraMode::Window),
            "smooth" | "fluid" => Some(CameraMode::Smooth),
            _ => None,
        }
    }
}

/// Top-left corner of the visible area in world units
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub pos: DVec2,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the player horizontally
    pub fn follow(&mut self, target: DVec2, mode: CameraMode) {
        let half_win = WINDOW_SIZE.x / 2.0;
        match mode {
            CameraMode::Centered => {
                self.pos.x = target.x - half_win;
            }
            CameraMode::Window | CameraMode::Smooth => {
                let left_area = target.x - half_win - CAMERA_SLACK;
                let right_area = target.x - half_win + CAMERA_SLACK;
                self.pos.x = self.pos.x.max(left_area).min(right_area);

                if mode == CameraMode::Smooth {
                    let dist = self.pos.x - target.x + half_win;
                    self.pos.x -= CAMERA_SMOOTHING * dist;
                }
            }
        }
    }

    /// Convert a world position to screen space
    pub fn to_screen(&self, world: DVec2) -> DVec2 {
        world - self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_tracks_exactly() {
        let mut camera = Camera::new();
        camera.follow(DVec2::new(1000.0, 300.0), CameraMode::Centered);
        assert_eq!(camera.pos, DVec2::new(360.0, 0.0));
        assert_eq!(camera.to_screen(DVec2::new(1000.0, 300.0)), DVec2::new(640.0, 300.0));
    }

    #[test]
    fn test_window_has_slack() {
        let mut camera = Camera { pos: DVec2::new(360.0, 0.0) };

        // Inside the band: camera stays put
        camera.follow(DVec2::new(1080.0, 0.0), CameraMode::Window);
        assert_eq!(camera.pos.x, 360.0);
        camera.follow(DVec2::new(920.0, 0.0), CameraMode::Window);
        assert_eq!(camera.pos.x, 360.0);

        // Leaving it drags the camera along
        camera.follow(DVec2::new(1200.0, 0.0), CameraMode::Window);
        assert_eq!(camera.pos.x, 460.0);
        camera.follow(DVec2::new(500.0, 0.0), CameraMode::Window);
        assert_eq!(camera.pos.x, -40.0);
    }

    #[test]
    fn test_smooth_eases_toward_center() {
        let mut camera = Camera { pos: DVec2::new(360.0, 0.0) };
        camera.follow(DVec2::new(1080.0, 0.0), CameraMode::Smooth);
        // 80 units off center, closes 5% of the gap
        assert!((camera.pos.x - 364.0).abs() < 1e-9);
    }

    #[test]
    fn test_mode_names() {
        for mode in [CameraMode::Centered, CameraMode::Window, CameraMode::Smooth] {
            assert_eq!(CameraMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(CameraMode::from_str("Fluid"), Some(CameraMode::Smooth));
        assert_eq!(CameraMode::from_str("spinning"), None);
    }
}
