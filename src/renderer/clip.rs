use crate::vertex::ClipSpaceVertex;

pub trait Clipper {
    // 接收一个裁剪空间的三角形
    // 返回一个 Vec，其中包含裁剪后产生的零个或一个三角形
    fn clip_triangle(&self, triangle: &[ClipSpaceVertex; 3]) -> Vec<[ClipSpaceVertex; 3]>;
}

// 只做整三角形级别的丢弃，不产生新顶点
pub struct SimpleClipper;

impl Clipper for SimpleClipper {
    fn clip_triangle(&self, triangle: &[ClipSpaceVertex; 3]) -> Vec<[ClipSpaceVertex; 3]> {
        // 所有顶点都在相机后面时整个丢弃，避免透视除法翻转
        let all_behind = triangle.iter().all(|v| v.position.w < 0.0);
        if all_behind {
            vec![]
        } else {
            vec![*triangle]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Vector4 as Vec4;

    fn vert(w: f32) -> ClipSpaceVertex {
        ClipSpaceVertex {
            position: Vec4::new(0.0, 0.0, 0.0, w),
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }

    #[test]
    fn triangle_behind_camera_is_dropped() {
        let tri = [vert(-1.0), vert(-2.0), vert(-0.5)];
        assert!(SimpleClipper.clip_triangle(&tri).is_empty());
    }

    #[test]
    fn visible_triangle_is_kept() {
        let tri = [vert(1.0), vert(1.0), vert(-0.5)];
        assert_eq!(SimpleClipper.clip_triangle(&tri).len(), 1);
    }
}
