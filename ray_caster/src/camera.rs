use indicatif::{ParallelProgressIterator, ProgressStyle};
use parking_lot::Mutex;
use rayon::prelude::*;

use crate::{canvas::Canvas, world::World, Matrix, Ray, Result, Tuple};

/// Maps the scene onto a canvas of hsize x vsize pixels through a given
/// field of view. The geometry derived at construction never changes; only
/// the transform may be swapped out.
#[derive(Debug)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transform: Matrix,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.).tan();
        let aspect = hsize as f64 / vsize as f64;

        let (half_width, half_height) = if aspect >= 1. {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        let pixel_size = half_width * 2. / hsize as f64;

        Self {
            hsize,
            vsize,
            field_of_view,
            transform: Matrix::identity(),
            half_width,
            half_height,
            pixel_size,
        }
    }

    pub fn with_transform(mut self, transform: Matrix) -> Self {
        self.transform = transform;
        self
    }

    /// Finds the world coordinates at the center of pixel (px, py), then
    /// constructs the ray that passes through them.
    fn ray_for_pixel(&self, px: usize, py: usize) -> Result<Ray> {
        // the offset from the edge of the canvas to the pixel's center
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;

        // the untransformed coordinates of the pixel in world space
        // (the camera looks toward -z, so +x is to the left)
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        // transform the canvas point (the canvas sits at z = -1) and the
        // origin, then take the direction between them
        let pixel = self.transform.inverse()? * Tuple::point(world_x, world_y, -1.);
        let origin = self.transform.inverse()? * Tuple::point(0., 0., 0.);
        let direction = (pixel - origin).normalize();

        Ok(Ray::new(origin, direction))
    }

    /// Casts a ray through every pixel of the canvas and paints each pixel
    /// with the color the world returns for it. Scanlines render in
    /// parallel; the world must not be mutated for the duration of the
    /// pass. Side effect: draws a progress bar on stderr.
    pub fn render(&self, world: &World) -> Result<Canvas> {
        let image = Mutex::new(Canvas::new(self.hsize, self.vsize));

        let style = ProgressStyle::with_template(
            "{msg} {elapsed:>5} {bar:40.cyan/blue} {pos:>6}/{len:6} rows",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());

        (0..self.vsize)
            .into_par_iter()
            .progress_with_style(style)
            .with_message("Rendering")
            .try_for_each(|y| {
                let mut row = Vec::with_capacity(self.hsize);
                for x in 0..self.hsize {
                    let ray = self.ray_for_pixel(x, y)?;
                    row.push(world.color_at(&ray)?);
                }

                // one lock per finished scanline, not per pixel
                let mut image = image.lock();
                for (x, color) in row.into_iter().enumerate() {
                    image.write_pixel(x, y, color);
                }
                Ok::<(), crate::RayCasterError>(())
            })?;

        Ok(image.into_inner())
    }
}
