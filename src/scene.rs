use cgmath::{Matrix4 as Mat4, Vector3 as Vec3, Vector4 as Vec4};
use serde::Deserialize;
use serde_json::from_reader;
use std::{error::Error, fs::File, path::Path};

use crate::renderer::Renderer;
use crate::vertex::Triangle;

/// 场景文件：三个必选的三角形成员
#[derive(Debug, Deserialize)]
pub struct SceneConfig {
    pub triangle: TriangleConfig,
    pub triangle2: TriangleConfig,
    pub triangle3: TriangleConfig,
}

#[derive(Debug, Deserialize)]
pub struct TriangleConfig {
    pub color: [u8; 4],
    pub center: [f64; 3],
    pub size: f64,
}

impl TriangleConfig {
    pub fn to_triangle(&self) -> Triangle {
        let color = Vec4::new(
            self.color[0] as f32 / 255.0,
            self.color[1] as f32 / 255.0,
            self.color[2] as f32 / 255.0,
            self.color[3] as f32 / 255.0,
        );
        let center = Vec3::new(
            self.center[0] as f32,
            self.center[1] as f32,
            self.center[2] as f32,
        );
        Triangle::from_center_size(color, center, self.size as f32)
    }
}

/// 可绘制的场景对象
pub trait Renderable {
    fn center(&self) -> Vec3<f32>;
    fn draw(&self, renderer: &mut Renderer, mvp: &Mat4<f32>);
}

pub struct SceneTriangle {
    triangle: Triangle,
}

impl Renderable for SceneTriangle {
    fn center(&self) -> Vec3<f32> {
        self.triangle.get_center()
    }

    fn draw(&self, renderer: &mut Renderer, mvp: &Mat4<f32>) {
        renderer.render_triangle(&self.triangle, mvp);
    }
}

pub fn load_scene(path: &Path) -> Result<Vec<Box<dyn Renderable>>, Box<dyn Error>> {
    let file = File::open(path)?;
    let config: SceneConfig = from_reader(file)?;
    Ok(vec![
        Box::new(SceneTriangle {
            triangle: config.triangle.to_triangle(),
        }),
        Box::new(SceneTriangle {
            triangle: config.triangle2.to_triangle(),
        }),
        Box::new(SceneTriangle {
            triangle: config.triangle3.to_triangle(),
        }),
    ])
}
