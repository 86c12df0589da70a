use cgmath::{Matrix4 as Mat4, Rad, SquareMatrix, Vector3 as Vec3};
use minifb::{Key, KeyRepeat, Window, WindowOptions};
use std::error::Error;
use std::f32::consts::PI;

use crate::camera::Camera;
use crate::renderer::Renderer;
use crate::scene::Renderable;
use crate::{FAR_PLANE, FPS, GRAY, NEAR_PLANE, WINDOW_HEIGHT, WINDOW_WIDTH};

#[derive(Debug, Clone, Copy)]
pub enum RenderMode {
    /// 固定功能立即模式：顶点直接当 NDC 用，不做相机变换
    Flat,
    /// 透视相机 + 每个对象绕自身中心做 Y 轴旋转
    Camera,
}

/// 绕对象自身中心的 Y 轴旋转：平移到原点、旋转、再平移回去
pub fn rotate_around_self(angle: f32, center: Vec3<f32>) -> Mat4<f32> {
    let translate_to_origin = Mat4::from_translation(-center);
    let rotate = Mat4::from_angle_y(Rad(angle));
    let translate_back = Mat4::from_translation(center);

    translate_back * rotate * translate_to_origin
}

pub struct App {
    window: Window,
    renderer: Renderer,
    objects: Vec<Box<dyn Renderable>>,
    mode: RenderMode,
    frame: usize,
}

impl App {
    pub fn new(
        title: &str,
        mode: RenderMode,
        objects: Vec<Box<dyn Renderable>>,
    ) -> Result<Self, Box<dyn Error>> {
        let mut window = Window::new(
            title,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            WindowOptions::default(),
        )?;
        window.set_target_fps(FPS);

        let camera = Camera::new(
            NEAR_PLANE,
            FAR_PLANE,
            WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
            (45.0_f32).to_radians(),
        );
        let renderer = Renderer::new(camera, WINDOW_WIDTH, WINDOW_HEIGHT);

        Ok(Self {
            window,
            renderer,
            objects,
            mode,
            frame: 0,
        })
    }

    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        while self.window.is_open() && !self.window.is_key_down(Key::Escape) {
            self.renderer.framebuffer.clear(GRAY);

            let view_proj = match self.mode {
                RenderMode::Flat => Mat4::identity(),
                RenderMode::Camera => self.renderer.camera.get_view_proj_mat(),
            };
            // Camera 模式下每 4 秒转一圈
            let angle = match self.mode {
                RenderMode::Flat => 0.0,
                RenderMode::Camera => self.frame as f32 * 2.0 * PI / (FPS * 4) as f32,
            };

            for object in &self.objects {
                let model = rotate_around_self(angle, object.center());
                object.draw(&mut self.renderer, &(view_proj * model));
            }

            if self.window.is_key_pressed(Key::S, KeyRepeat::No) {
                let path = format!("screenshot_{:03}.png", self.frame);
                self.renderer.framebuffer.save_to_image(&path)?;
                println!("已保存截图: {path}");
            }

            self.window.update_with_buffer(
                &self.renderer.framebuffer.data,
                WINDOW_WIDTH,
                WINDOW_HEIGHT,
            )?;
            self.frame += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4 as Vec4;

    #[test]
    fn rotation_keeps_center_fixed() {
        let center = Vec3::new(0.5, -0.2, -1.0);
        let m = rotate_around_self(1.3, center);
        let rotated = m * center.extend(1.0);

        assert!((rotated.x - center.x).abs() < 1e-5);
        assert!((rotated.y - center.y).abs() < 1e-5);
        assert!((rotated.z - center.z).abs() < 1e-5);
    }

    #[test]
    fn full_turn_is_identity() {
        let center = Vec3::new(0.0, 0.0, -2.0);
        let m = rotate_around_self(2.0 * PI, center);
        let p = Vec4::new(1.0, 0.5, -2.0, 1.0);
        let q = m * p;

        assert!((q.x - p.x).abs() < 1e-4);
        assert!((q.y - p.y).abs() < 1e-4);
        assert!((q.z - p.z).abs() < 1e-4);
    }
}
