use image::{ColorType, DynamicImage};
use ndarray::{Array3, Array4, Axis, concatenate};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TensorError {
    #[error("image shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: [usize; 3],
        actual: [usize; 3],
    },

    #[error("cannot stack an empty image batch")]
    EmptyBatch,

    #[error("unsupported pixel layout {0:?}: expected 8 bits per channel")]
    UnsupportedInput(ColorType),

    #[error("failed to assemble tensor: {0}")]
    Shape(String),
}

pub type Result<T> = std::result::Result<T, TensorError>;

/// Input to [`to_tensor`]: one decoded image or an ordered batch of them.
#[derive(Debug, Clone)]
pub enum TensorInput {
    Single(DynamicImage),
    Batch(Vec<DynamicImage>),
}

impl From<DynamicImage> for TensorInput {
    fn from(image: DynamicImage) -> Self {
        TensorInput::Single(image)
    }
}

impl From<Vec<DynamicImage>> for TensorInput {
    fn from(images: Vec<DynamicImage>) -> Self {
        TensorInput::Batch(images)
    }
}

/// Converts decoded image data into a `[N, H, W, C]` float tensor with pixel
/// values scaled from `[0, 255]` to `[0.0, 1.0]`.
///
/// A single image yields `N = 1`; a batch stacks one entry per image along
/// the leading axis. Every image in a batch must share the same height,
/// width, and channel count. No resizing, cropping, or color-space
/// conversion is performed.
pub fn to_tensor(input: impl Into<TensorInput>) -> Result<Array4<f32>> {
    match input.into() {
        TensorInput::Single(image) => Ok(image_tensor(&image)?.insert_axis(Axis(0))),
        TensorInput::Batch(images) => {
            if images.is_empty() {
                return Err(TensorError::EmptyBatch);
            }

            let mut expected = None;
            let mut tensors = Vec::with_capacity(images.len());
            for image in &images {
                let tensor = image_tensor(image)?;
                let shape = [tensor.shape()[0], tensor.shape()[1], tensor.shape()[2]];
                match expected {
                    None => expected = Some(shape),
                    Some(first) if first != shape => {
                        return Err(TensorError::ShapeMismatch {
                            expected: first,
                            actual: shape,
                        });
                    }
                    Some(_) => {}
                }
                tensors.push(tensor.insert_axis(Axis(0)));
            }

            let views: Vec<_> = tensors.iter().map(|tensor| tensor.view()).collect();
            concatenate(Axis(0), &views).map_err(|err| TensorError::Shape(err.to_string()))
        }
    }
}

/// One image as `[H, W, C]`, channel count taken from the source color type.
fn image_tensor(image: &DynamicImage) -> Result<Array3<f32>> {
    let channels = match image.color() {
        ColorType::L8 => 1,
        ColorType::La8 => 2,
        ColorType::Rgb8 => 3,
        ColorType::Rgba8 => 4,
        other => return Err(TensorError::UnsupportedInput(other)),
    };
    let (height, width) = (image.height() as usize, image.width() as usize);

    let samples: Vec<f32> = image
        .as_bytes()
        .iter()
        .map(|&sample| f32::from(sample) / 255.0)
        .collect();

    Array3::from_shape_vec((height, width, channels), samples)
        .map_err(|err| TensorError::Shape(err.to_string()))
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgb, RgbImage};

    use super::*;

    fn rgb_image(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb([value; 3])))
    }

    #[test]
    fn test_single_image_shape_and_scaling() {
        let tensor = to_tensor(rgb_image(2, 2, 255)).unwrap();

        assert_eq!(tensor.shape(), &[1, 2, 2, 3]);
        assert!(tensor.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_zero_pixels_map_to_zero() {
        let tensor = to_tensor(rgb_image(3, 1, 0)).unwrap();

        assert_eq!(tensor.shape(), &[1, 1, 3, 3]);
        assert!(tensor.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_mid_range_scaling() {
        let tensor = to_tensor(rgb_image(1, 1, 51)).unwrap();

        assert!(tensor.iter().all(|&v| (v - 0.2).abs() < 1e-6));
    }

    #[test]
    fn test_batch_stacks_along_leading_axis() {
        let tensor = to_tensor(vec![rgb_image(2, 2, 255), rgb_image(2, 2, 0)]).unwrap();

        assert_eq!(tensor.shape(), &[2, 2, 2, 3]);
        assert!(tensor.index_axis(Axis(0), 0).iter().all(|&v| v == 1.0));
        assert!(tensor.index_axis(Axis(0), 1).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_mismatched_dimensions_fail() {
        let result = to_tensor(vec![rgb_image(2, 2, 255), rgb_image(3, 2, 255)]);

        assert!(matches!(
            result,
            Err(TensorError::ShapeMismatch {
                expected: [2, 2, 3],
                actual: [2, 3, 3],
            })
        ));
    }

    #[test]
    fn test_mismatched_channels_fail() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([128])));
        let result = to_tensor(vec![rgb_image(2, 2, 255), gray]);

        assert!(matches!(result, Err(TensorError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_empty_batch_fails() {
        let result = to_tensor(Vec::<DynamicImage>::new());

        assert!(matches!(result, Err(TensorError::EmptyBatch)));
    }

    #[test]
    fn test_channel_count_follows_source() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 2, Luma([255])));
        let tensor = to_tensor(gray).unwrap();

        assert_eq!(tensor.shape(), &[1, 2, 4, 1]);
    }

    #[test]
    fn test_sixteen_bit_input_is_unsupported() {
        let image = DynamicImage::new_rgb16(2, 2);
        let result = to_tensor(image);

        assert!(matches!(result, Err(TensorError::UnsupportedInput(_))));
    }
}
