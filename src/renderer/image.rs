//! Owned ARGB images used as sprites

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl Bounds {
    pub fn width(&self) -> usize {
        self.right - self.left + 1
    }

    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }
}

/// Row-major `0xAARRGGBB` image
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u32>,
}

impl Image {
    /// Fully transparent image
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: usize, height: usize, color: u32) -> Self {
        Self {
            width,
            height,
            data: vec![color; width * height],
        }
    }

    /// Smallest rectangle holding every pixel with non-zero alpha
    pub fn visible_bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if self.data[x + y * self.width] >> 24 == 0 {
                    continue;
                }
                bounds = Some(match bounds {
                    None => Bounds {
                        left: x,
                        top: y,
                        right: x,
                        bottom: y,
                    },
                    Some(b) => Bounds {
                        left: b.left.min(x),
                        top: b.top.min(y),
                        right: b.right.max(x),
                        bottom: b.bottom.max(y),
                    },
                });
            }
        }
        bounds
    }

    /// Copy out `bounds`; parts outside this image come back transparent
    pub fn crop(&self, bounds: &Bounds) -> Image {
        let mut out = Image::new(bounds.width(), bounds.height());
        for y in 0..out.height {
            let sy = y + bounds.top;
            if sy >= self.height {
                break;
            }
            for x in 0..out.width {
                let sx = x + bounds.left;
                if sx >= self.width {
                    break;
                }
                out.data[x + y * out.width] = self.data[sx + sy * self.width];
            }
        }
        out
    }

    /// Crop away fully transparent borders (an empty image stays as is)
    pub fn trimmed(self) -> Image {
        match self.visible_bounds() {
            Some(bounds) => self.crop(&bounds),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_bounds() {
        let mut image = Image::new(8, 6);
        assert_eq!(image.visible_bounds(), None);

        image.data[2 + 8] = 0xFF000000;
        image.data[5 + 4 * 8] = 0x01000000;
        assert_eq!(
            image.visible_bounds(),
            Some(Bounds {
                left: 2,
                top: 1,
                right: 5,
                bottom: 4
            })
        );
    }

    #[test]
    fn test_trim_keeps_every_opaque_pixel() {
        let mut image = Image::new(10, 10);
        let marks = [(3, 2), (7, 2), (5, 8)];
        for (x, y) in marks {
            image.data[x + y * 10] = 0xFF00FF00 | (x as u32);
        }

        let trimmed = image.clone().trimmed();
        assert_eq!((trimmed.width, trimmed.height), (5, 7));
        for (x, y) in marks {
            let p = trimmed.data[(x - 3) + (y - 2) * trimmed.width];
            assert_eq!(p, 0xFF00FF00 | (x as u32));
        }
    }

    #[test]
    fn test_crop_past_edge_is_transparent() {
        let image = Image::filled(2, 2, 0xFFFFFFFF);
        let out = image.crop(&Bounds {
            left: 1,
            top: 1,
            right: 2,
            bottom: 2,
        });
        assert_eq!(out.data, vec![0xFFFFFFFF, 0, 0, 0]);
    }

    #[test]
    fn test_empty_image_trims_to_itself() {
        let image = Image::new(4, 4);
        assert_eq!(image.clone().trimmed(), image);
    }
}
