/// 深度缓冲的清空值，NDC 深度映射到 [0,1] 之后的最大值
const CLEAR_DEPTH: f32 = 1.0;

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
    pub depth: Vec<f32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            data: vec![0; width * height],
            depth: vec![CLEAR_DEPTH; width * height],
        }
    }

    pub fn clear(&mut self, color: u32) {
        self.data.fill(color);
        self.depth.fill(CLEAR_DEPTH);
    }

    /// 带深度测试的写入，越界坐标直接忽略
    pub fn put_pixel(&mut self, x: usize, y: usize, color: u32, depth: f32) {
        if x < self.width && y < self.height {
            let idx = y * self.width + x;
            if depth < self.depth[idx] {
                self.data[idx] = color;
                self.depth[idx] = depth;
            }
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.width + x]
    }

    pub fn save_to_image(&self, filepath: &str) -> Result<(), image::ImageError> {
        use image::{ImageBuffer, Rgba};

        let mut img = ImageBuffer::new(self.width as u32, self.height as u32);

        for y in 0..self.height {
            for x in 0..self.width {
                let color = self.data[y * self.width + x];
                let a = ((color >> 24) & 0xFF) as u8;
                let r = ((color >> 16) & 0xFF) as u8;
                let g = ((color >> 8) & 0xFF) as u8;
                let b = (color & 0xFF) as u8;

                img.put_pixel(x as u32, y as u32, Rgba([r, g, b, a]));
            }
        }

        img.save(filepath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_color_and_depth() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.put_pixel(1, 1, 0xFFFF0000, 0.3);
        fb.clear(0xFF808080);

        assert_eq!(fb.get_pixel(1, 1), 0xFF808080);
        assert!(fb.depth.iter().all(|&d| d == CLEAR_DEPTH));
    }

    #[test]
    fn nearer_depth_wins() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.put_pixel(2, 2, 0xFFFF0000, 0.8);
        fb.put_pixel(2, 2, 0xFF00FF00, 0.2);
        // 更远的写入被深度测试拒绝
        fb.put_pixel(2, 2, 0xFF0000FF, 0.5);

        assert_eq!(fb.get_pixel(2, 2), 0xFF00FF00);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.put_pixel(4, 0, 0xFFFFFFFF, 0.0);
        fb.put_pixel(0, 100, 0xFFFFFFFF, 0.0);

        assert!(fb.data.iter().all(|&c| c == 0));
    }
}
