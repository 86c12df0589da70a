pub mod clip;
pub mod vertex_shader;

use crate::camera::Camera;
use crate::framebuffer::FrameBuffer;
use crate::rasterizer;
use crate::vertex::{ClipSpaceVertex, RasterPoint, Triangle};
use cgmath::{Matrix4 as Mat4, Vector2 as Vec2, Vector3 as Vec3, Vector4 as Vec4};

use self::clip::{Clipper, SimpleClipper};
use self::vertex_shader::{DefaultVertexShader, VertexShader, VertexShaderUniforms};

pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

pub struct Renderer {
    pub(crate) camera: Camera,
    pub(crate) framebuffer: FrameBuffer,
    pub(crate) viewport: Viewport,
}

impl Renderer {
    pub fn new(camera: Camera, w: usize, h: usize) -> Self {
        let framebuffer = FrameBuffer::new(w, h);
        Self {
            camera,
            framebuffer,
            viewport: Viewport {
                x: 0,
                y: 0,
                w: w as i32,
                h: h as i32,
            },
        }
    }

    /// 立即模式入口：等价于原来的 draw_triangle(color, center, size)
    pub fn draw_triangle(
        &mut self,
        color: Vec4<f32>,
        center: Vec3<f32>,
        size: f32,
        mvp: &Mat4<f32>,
    ) {
        let triangle = Triangle::from_center_size(color, center, size);
        self.render_triangle(&triangle, mvp);
    }

    /// 完整管线：顶点变换 → 整三角形裁剪 → 视口变换 → 光栅化
    pub fn render_triangle(&mut self, triangle: &Triangle, mvp: &Mat4<f32>) {
        let vertex_shader = DefaultVertexShader;
        let clipper = SimpleClipper;

        let uniforms = VertexShaderUniforms { mvp_matrix: mvp };
        let clip_space_triangle = vertex_shader.shade_triangle(triangle, &uniforms);

        for clipped in clipper.clip_triangle(&clip_space_triangle) {
            let raster_points = self.viewport_transform(&clipped);
            self.rasterize_triangle(&raster_points);
        }
    }

    // 视口变换：透视除法后把 NDC 映射到屏幕像素，深度归一化到 [0,1]
    fn viewport_transform(&self, clip_triangle: &[ClipSpaceVertex; 3]) -> [RasterPoint; 3] {
        clip_triangle.map(|clip_v| {
            let ndc_pos = clip_v.position / clip_v.position.w;

            let screen_x =
                (ndc_pos.x + 1.0) * 0.5 * self.viewport.w as f32 + self.viewport.x as f32;
            let screen_y = self.viewport.h as f32
                - (ndc_pos.y + 1.0) * 0.5 * self.viewport.h as f32
                + self.viewport.y as f32;

            RasterPoint {
                pos: Vec2::new(screen_x, screen_y),
                z: (ndc_pos.z + 1.0) * 0.5,
                color: clip_v.color,
            }
        })
    }

    // 光栅化：包围盒内逐像素做内部测试、插值、深度测试
    fn rasterize_triangle(&mut self, points: &[RasterPoint; 3]) {
        let screen = [points[0].pos, points[1].pos, points[2].pos];
        let (min_x, min_y, max_x, max_y) = rasterizer::get_box(&screen);

        // 包围盒夹取到视口内
        let min_x = min_x.max(self.viewport.x);
        let min_y = min_y.max(self.viewport.y);
        let max_x = max_x.min(self.viewport.x + self.viewport.w - 1);
        let max_y = max_y.min(self.viewport.y + self.viewport.h - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if !rasterizer::is_inside_triangle(&screen, &p) {
                    continue;
                }
                let Some(bary) = rasterizer::get_barycentric_coords(&screen, &p) else {
                    continue;
                };

                let color = rasterizer::interpolate_color(points, bary);
                let depth = rasterizer::interpolate_depth(points, bary);

                self.framebuffer
                    .put_pixel(x as usize, y as usize, pack_argb(color), depth);
            }
        }
    }
}

/// 把 [0,1] 范围的 RGBA 颜色打包为 ARGB8888
pub fn pack_argb(color: Vec4<f32>) -> u32 {
    let r = (color.x.clamp(0.0, 1.0) * 255.0) as u32;
    let g = (color.y.clamp(0.0, 1.0) * 255.0) as u32;
    let b = (color.z.clamp(0.0, 1.0) * 255.0) as u32;
    let a = (color.w.clamp(0.0, 1.0) * 255.0) as u32;
    a << 24 | r << 16 | g << 8 | b
}
