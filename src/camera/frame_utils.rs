//! Frame conversion and geometry transforms for the capture path.

use nokhwa::pixel_format::RgbFormat;
use std::time::Instant;

use super::types::RgbFrame;
use crate::ascii::GrayFrame;

/// Convert a nokhwa buffer to our RGB frame format.
///
/// Handles various camera formats (MJPEG, YUYV, NV12, etc.) via nokhwa's
/// built-in decode, which converts from the camera's native format to RGB.
///
/// Returns `None` if the conversion fails (unsupported format or corrupt
/// data).
pub fn convert_to_rgb(buffer: &nokhwa::Buffer) -> Option<RgbFrame> {
    let decoded = buffer.decode_image::<RgbFormat>().ok()?;
    let resolution = buffer.resolution();

    Some(RgbFrame {
        data: decoded.into_raw(),
        width: resolution.width(),
        height: resolution.height(),
        timestamp: Instant::now(),
    })
}

/// Convert an RGB frame to grayscale using the ITU-R BT.601 luminance
/// formula `Y = 0.299*R + 0.587*G + 0.114*B`, with the coefficients scaled
/// by 1000 to stay in integer math.
pub fn to_grayscale(frame: &RgbFrame) -> GrayFrame {
    let pixel_count = (frame.width * frame.height) as usize;
    let mut gray = Vec::with_capacity(pixel_count);

    for rgb in frame.data.chunks_exact(3) {
        let r = rgb[0] as u32;
        let g = rgb[1] as u32;
        let b = rgb[2] as u32;
        let luminance = (299 * r + 587 * g + 114 * b) / 1000;
        gray.push(luminance as u8);
    }

    GrayFrame::from_data(gray, frame.width, frame.height)
}

/// Mirror a grayscale frame horizontally (flip left-right) for selfie mode.
pub fn mirror_rows(frame: &mut GrayFrame) {
    let width = frame.width as usize;
    for row in frame.data.chunks_exact_mut(width) {
        row.reverse();
    }
}

/// Center-crop a frame for zoom: the visible region shrinks by `1/zoom`
/// along each axis. Zoom factors at or below 1.0 return the frame as-is.
pub fn center_crop(frame: &GrayFrame, zoom: f32) -> GrayFrame {
    if zoom <= 1.0 {
        return frame.clone();
    }

    let new_w = ((frame.width as f32 / zoom) as u32).max(1);
    let new_h = ((frame.height as f32 / zoom) as u32).max(1);
    let start_x = (frame.width - new_w) / 2;
    let start_y = (frame.height - new_h) / 2;

    let mut data = Vec::with_capacity((new_w * new_h) as usize);
    for y in start_y..start_y + new_h {
        let row = frame.row(y);
        data.extend_from_slice(&row[start_x as usize..(start_x + new_w) as usize]);
    }

    GrayFrame::from_data(data, new_w, new_h)
}

/// Resize a grayscale frame to exactly the target dimensions using area
/// averaging.
///
/// Each output pixel averages the source pixels that fall inside its cell.
/// When a cell covers no whole source pixel (upscaling), the nearest source
/// pixel is sampled instead, so the output always has exactly
/// `width * height` values.
pub fn resize_area(frame: &GrayFrame, width: u32, height: u32) -> GrayFrame {
    if width == 0 || height == 0 {
        return GrayFrame::new(width, height);
    }
    if frame.width == width && frame.height == height {
        return frame.clone();
    }

    let cell_w = frame.width as f32 / width as f32;
    let cell_h = frame.height as f32 / height as f32;

    let mut data = Vec::with_capacity((width * height) as usize);
    for cy in 0..height {
        let start_y = (cy as f32 * cell_h) as u32;
        let end_y = ((cy + 1) as f32 * cell_h) as u32;

        for cx in 0..width {
            let start_x = (cx as f32 * cell_w) as u32;
            let end_x = ((cx + 1) as f32 * cell_w) as u32;

            let mut sum = 0u32;
            let mut count = 0u32;
            for py in start_y..end_y.min(frame.height) {
                for px in start_x..end_x.min(frame.width) {
                    sum += frame.get(px, py) as u32;
                    count += 1;
                }
            }

            let value = if count > 0 {
                (sum / count) as u8
            } else {
                // Cell smaller than a source pixel: sample the nearest one
                frame.get(
                    start_x.min(frame.width - 1),
                    start_y.min(frame.height - 1),
                )
            };
            data.push(value);
        }
    }

    GrayFrame::from_data(data, width, height)
}
