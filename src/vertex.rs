use cgmath::{Vector2 as Vec2, Vector3 as Vec3, Vector4 as Vec4};

/// 带颜色信息的顶点（用于插值计算）
#[derive(Debug, Clone, Copy)]
pub struct ColoredVertex {
    pub pos: Vec3<f32>,
    pub color: Vec4<f32>,
}

/// 裁剪空间的顶点（MVP变换之后、透视除法之前）
#[derive(Debug, Clone, Copy)]
pub struct ClipSpaceVertex {
    pub position: Vec4<f32>,
    pub color: Vec4<f32>,
}

/// 光栅化阶段的 2D 点（带颜色和深度）
#[derive(Debug, Clone, Copy)]
pub struct RasterPoint {
    pub pos: Vec2<f32>,
    pub color: Vec4<f32>,
    pub z: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [ColoredVertex; 3],
}

impl Triangle {
    pub fn new(v0: ColoredVertex, v1: ColoredVertex, v2: ColoredVertex) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// 由中心点和半边长展开等腰三角形：
    /// 顶点在中心正上方，底边两点在中心下方左右两侧，三点 z 相同
    pub fn from_center_size(color: Vec4<f32>, center: Vec3<f32>, size: f32) -> Self {
        let top = Vec3::new(center.x, center.y + size, center.z);
        let left = Vec3::new(center.x - size, center.y - size, center.z);
        let right = Vec3::new(center.x + size, center.y - size, center.z);
        Self::new(
            ColoredVertex { pos: top, color },
            ColoredVertex { pos: left, color },
            ColoredVertex { pos: right, color },
        )
    }

    pub fn get_center(&self) -> Vec3<f32> {
        (self.vertices[0].pos + self.vertices[1].pos + self.vertices[2].pos) / 3.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_eq(a: Vec3<f32>, b: Vec3<f32>) {
        assert!((a.x - b.x).abs() < 1e-6, "{:?} != {:?}", a, b);
        assert!((a.y - b.y).abs() < 1e-6, "{:?} != {:?}", a, b);
        assert!((a.z - b.z).abs() < 1e-6, "{:?} != {:?}", a, b);
    }

    #[test]
    fn from_center_size_expands_isosceles() {
        let color = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let tri = Triangle::from_center_size(color, Vec3::new(0.5, -0.2, 0.1), 0.3);

        let [top, left, right] = tri.vertices;
        assert_vec3_eq(top.pos, Vec3::new(0.5, 0.1, 0.1));
        assert_vec3_eq(left.pos, Vec3::new(0.2, -0.5, 0.1));
        assert_vec3_eq(right.pos, Vec3::new(0.8, -0.5, 0.1));
    }

    #[test]
    fn center_of_expanded_triangle_keeps_x_and_z() {
        let tri = Triangle::from_center_size(
            Vec4::new(0.0, 1.0, 0.0, 1.0),
            Vec3::new(-0.4, 0.3, -2.0),
            0.5,
        );
        let c = tri.get_center();
        assert!((c.x - (-0.4)).abs() < 1e-6);
        assert!((c.z - (-2.0)).abs() < 1e-6);
    }
}
