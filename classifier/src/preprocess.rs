use image::DynamicImage;
use image::imageops::FilterType;
use ndarray::{Array3, Array4, Axis};
use shared::MAX_IMAGE_SIZE;

use crate::error::ClassifierError;

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ClassifierError> {
    Ok(image::load_from_memory(bytes)?)
}

/// Squash-resizes to `resolution × resolution` (aspect ratio is not kept)
/// and scales RGB bytes into `[0, 1]`. Shape is `[R, R, 3]`, HWC order.
pub fn to_input_tensor(
    image: &DynamicImage,
    resolution: u32,
) -> Result<Array3<f32>, ClassifierError> {
    if resolution == 0 {
        return Err(ClassifierError::Preprocessing(
            "input resolution must be positive".to_string(),
        ));
    }
    if resolution > MAX_IMAGE_SIZE {
        return Err(ClassifierError::Preprocessing(format!(
            "input resolution {} exceeds {}",
            resolution, MAX_IMAGE_SIZE
        )));
    }

    let resized = image.resize_exact(resolution, resolution, FilterType::Triangle);
    let rgb = resized.to_rgb8();
    let side = resolution as usize;
    let pixels: Vec<f32> = rgb
        .into_raw()
        .into_iter()
        .map(|v| f32::from(v) / 255.0)
        .collect();

    Array3::from_shape_vec((side, side, 3), pixels)
        .map_err(|e| ClassifierError::Preprocessing(e.to_string()))
}

/// [`to_input_tensor`] with a leading batch axis: `[1, R, R, 3]`.
pub fn preprocess_image(
    image: &DynamicImage,
    resolution: u32,
) -> Result<Array4<f32>, ClassifierError> {
    Ok(to_input_tensor(image, resolution)?.insert_axis(Axis(0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 128])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn any_source_size_maps_to_square_target() {
        for (w, h) in [(1, 1), (640, 480), (100, 300), (224, 224), (17, 5)] {
            let tensor = to_input_tensor(&gradient(w, h), 32).unwrap();
            assert_eq!(tensor.shape(), &[32, 32, 3]);
            assert!(tensor.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn batched_tensor_has_leading_unit_axis() {
        let tensor = preprocess_image(&gradient(50, 80), 224).unwrap();
        assert_eq!(tensor.shape(), &[1, 224, 224, 3]);
    }

    #[test]
    fn extremes_scale_to_unit_range() {
        let white = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([255, 255, 255])));
        let black = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])));
        assert!(to_input_tensor(&white, 2).unwrap().iter().all(|&v| v == 1.0));
        assert!(to_input_tensor(&black, 2).unwrap().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn alpha_channel_is_dropped() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 3, Rgba([255, 0, 51, 200])));
        let tensor = to_input_tensor(&img, 3).unwrap();
        assert_eq!(tensor.shape(), &[3, 3, 3]);
        assert!((tensor[[1, 1, 0]] - 1.0).abs() < 0.01);
        assert!(tensor[[1, 1, 1]].abs() < 0.01);
        assert!((tensor[[1, 1, 2]] - 0.2).abs() < 0.01);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let err = to_input_tensor(&gradient(4, 4), 0).unwrap_err();
        assert!(matches!(err, ClassifierError::Preprocessing(_)));
    }

    #[test]
    fn oversized_resolution_is_rejected() {
        let err = to_input_tensor(&gradient(4, 4), 4_000_000_000).unwrap_err();
        assert!(matches!(err, ClassifierError::Preprocessing(_)));
        assert!(to_input_tensor(&gradient(4, 4), MAX_IMAGE_SIZE + 1).is_err());
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ClassifierError::ImageDecode(_)));
    }
}
