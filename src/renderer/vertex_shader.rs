use crate::vertex::{ClipSpaceVertex, Triangle};
use cgmath::Matrix4 as Mat4;

pub struct VertexShaderUniforms<'a> {
    pub mvp_matrix: &'a Mat4<f32>,
}

pub trait VertexShader {
    // 接收一个模型空间的三角形和uniforms
    // 返回一个裁剪空间的三角形
    fn shade_triangle(
        &self,
        triangle: &Triangle,
        uniforms: &VertexShaderUniforms,
    ) -> [ClipSpaceVertex; 3];
}

/// 固定功能等价的顶点着色：只做 MVP 变换，颜色原样传递
pub struct DefaultVertexShader;

impl VertexShader for DefaultVertexShader {
    fn shade_triangle(
        &self,
        triangle: &Triangle,
        uniforms: &VertexShaderUniforms,
    ) -> [ClipSpaceVertex; 3] {
        triangle.vertices.map(|v| ClipSpaceVertex {
            position: *uniforms.mvp_matrix * v.pos.extend(1.0),
            color: v.color,
        })
    }
}
