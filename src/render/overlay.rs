//! Bordered box overlays on `(rows, cols, 3)` pixel buffers
//!
//! The border is drawn in the `pad`-pixel margin around each box so the annotated
//! region itself stays visible. Side bands cover the box rows only; the top and
//! bottom bands span the full padded width and fill the corners.

use crate::annotation::record::AnnotationTable;
use crate::io::error::{Result, Skin3dError};
use ndarray::{ArrayBase, Axis, DataMut, Ix3, Slice};
use std::ops::Range;

/// Pixel extent of a validated box and its border
#[derive(Debug, Clone, Copy)]
struct BorderFrame {
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    pad: usize,
}

impl BorderFrame {
    fn validate(
        dims: (usize, usize),
        (x, y, width, height): (i64, i64, i64, i64),
        pad: usize,
    ) -> Result<Self> {
        let out_of_bounds = || Skin3dError::OutOfBounds {
            x,
            y,
            width,
            height,
            pad,
            buffer: dims,
        };

        let fits = || -> Option<bool> {
            let p = i64::try_from(pad).ok()?;
            let rows = i64::try_from(dims.0).ok()?;
            let cols = i64::try_from(dims.1).ok()?;
            Some(
                width >= 0
                    && height >= 0
                    && x.checked_sub(p)? >= 0
                    && y.checked_sub(p)? >= 0
                    && x.checked_add(width)?.checked_add(p)? <= cols
                    && y.checked_add(height)?.checked_add(p)? <= rows,
            )
        };
        if fits() != Some(true) {
            return Err(out_of_bounds());
        }

        Ok(Self {
            x: x as usize,
            y: y as usize,
            width: width as usize,
            height: height as usize,
            pad,
        })
    }

    fn draw<S>(self, img: &mut ArrayBase<S, Ix3>, color: [u8; 3])
    where
        S: DataMut<Elem = u8>,
    {
        let Self {
            x,
            y,
            width,
            height,
            pad,
        } = self;
        let box_rows = y..y + height;
        let padded_cols = x - pad..x + width + pad;

        paint(img, box_rows.clone(), x - pad..x, color);
        paint(img, box_rows, x + width..x + width + pad, color);
        paint(img, y - pad..y, padded_cols.clone(), color);
        paint(img, y + height..y + height + pad, padded_cols, color);
    }
}

fn paint<S>(img: &mut ArrayBase<S, Ix3>, rows: Range<usize>, cols: Range<usize>, color: [u8; 3])
where
    S: DataMut<Elem = u8>,
{
    let mut band = img.slice_each_axis_mut(|axis| match axis.axis.index() {
        0 => Slice::from(rows.clone()),
        1 => Slice::from(cols.clone()),
        _ => Slice::from(..),
    });
    for mut pixel in band.lanes_mut(Axis(2)) {
        for (channel, value) in pixel.iter_mut().zip(color) {
            *channel = value;
        }
    }
}

fn check_channels<S>(img: &ArrayBase<S, Ix3>) -> Result<(usize, usize)>
where
    S: DataMut<Elem = u8>,
{
    let (rows, cols, channels) = img.dim();
    if channels == 3 {
        Ok((rows, cols))
    } else {
        Err(Skin3dError::InvalidBuffer {
            reason: format!("expected 3 channels, found {channels}"),
        })
    }
}

/// Draw a border of thickness `pad` around the box at (`x`, `y`)
///
/// # Errors
///
/// Returns an error if the buffer does not have 3 channels or the padded box
/// reaches outside it. The buffer is untouched on error.
pub fn embed_box_borders<S>(
    img: &mut ArrayBase<S, Ix3>,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
    color: [u8; 3],
    pad: usize,
) -> Result<()>
where
    S: DataMut<Elem = u8>,
{
    let dims = check_channels(img)?;
    BorderFrame::validate(dims, (x, y, width, height), pad)?.draw(img, color);
    Ok(())
}

/// Draw a border around every annotation of `annotations`
///
/// All boxes are checked before any pixel is written, so a failing call leaves
/// the buffer unmodified.
///
/// # Errors
///
/// Returns an error if the buffer does not have 3 channels or any padded box
/// reaches outside it.
pub fn embed_annotations<S>(
    img: &mut ArrayBase<S, Ix3>,
    annotations: &AnnotationTable,
    color: [u8; 3],
    pad: usize,
) -> Result<()>
where
    S: DataMut<Elem = u8>,
{
    let dims = check_channels(img)?;
    let frames = annotations
        .iter()
        .map(|record| {
            BorderFrame::validate(dims, (record.x, record.y, record.width, record.height), pad)
        })
        .collect::<Result<Vec<_>>>()?;

    for frame in frames {
        frame.draw(img, color);
    }
    Ok(())
}
