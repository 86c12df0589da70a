mod app;
mod camera;
mod framebuffer;
mod rasterizer;
mod renderer;
mod scene;
mod vertex;

use std::path::Path;

use crate::app::{App, RenderMode};

const WINDOW_WIDTH: usize = 512;
const WINDOW_HEIGHT: usize = 512;
const FPS: usize = 60;
const NEAR_PLANE: f32 = 1.0;
const FAR_PLANE: f32 = 5.0;
const GRAY: u32 = 0xFF808080; // 清屏色 (0.5, 0.5, 0.5, 1.0)

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 用法: tri-viewer [场景json路径] [flat|camera]
    let args: Vec<String> = std::env::args().collect();
    let path = args.get(1).map(String::as_str).unwrap_or("data.json");
    let mode = match args.get(2).map(String::as_str) {
        None | Some("flat") => RenderMode::Flat,
        Some("camera") => RenderMode::Camera,
        Some(other) => {
            return Err(format!("未知渲染模式: {other}（可选 flat 或 camera）").into());
        }
    };

    let objects = scene::load_scene(Path::new(path))?;
    println!("成功获取json，对象数量: {}", objects.len());
    println!("渲染模式: {:?}", mode);

    let mut app = App::new(&format!("tri-viewer - {path}"), mode, objects)?;
    app.run()
}
